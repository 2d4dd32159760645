use big_ints::BigInt;
use proptest::prelude::*;

type Oracle = num_bigint::BigInt;

/// Radix used to glue several `i64` chunks into one wide value.
const CHUNK: i64 = 1 << 40;

/// Folds the chunks with Horner's rule, both in `BigInt` and in the oracle.
fn wide(chunks: &[i64]) -> (BigInt, Oracle) {
    let mut big = BigInt::new();
    let mut oracle = Oracle::from(0);
    for &chunk in chunks {
        big = big * BigInt::from(CHUNK) + BigInt::from(chunk);
        oracle = oracle * Oracle::from(CHUNK) + Oracle::from(chunk);
    }
    (big, oracle)
}

fn wide_value() -> impl Strategy<Value = (BigInt, Oracle)> {
    prop::collection::vec(any::<i64>(), 0..5).prop_map(|chunks| wide(&chunks))
}

fn oracle_of(val: &BigInt) -> Oracle {
    val.to_str().parse().unwrap()
}

proptest! {
    #[test]
    fn prop_i64_round_trip(v in any::<i64>()) {
        prop_assert_eq!(BigInt::from(v).to_i64(), Ok(v));
        prop_assert_eq!(BigInt::from(v).to_str(), v.to_string());
        prop_assert_eq!(BigInt::from(v).to_str().parse::<i64>().unwrap(), v);
    }

    #[test]
    fn prop_decimal_matches_oracle((a, oracle) in wide_value()) {
        prop_assert_eq!(a.to_str(), oracle.to_string());
        prop_assert_eq!(a.to_string(), oracle.to_string());
        prop_assert_eq!(oracle_of(&a), oracle);
    }

    #[test]
    fn prop_add_identities((a, _) in wide_value()) {
        let zero = BigInt::new();
        prop_assert_eq!(&a + &zero, a.clone());
        prop_assert_eq!(&zero + &a, a.clone());
        prop_assert_eq!(&a + &-&a, zero.clone());
        prop_assert_eq!(&a - &a, zero);
    }

    #[test]
    fn prop_add_matches_oracle((a, oa) in wide_value(), (b, ob) in wide_value()) {
        prop_assert_eq!(oracle_of(&(&a + &b)), &oa + &ob);
        prop_assert_eq!(oracle_of(&(&a - &b)), &oa - &ob);
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn prop_add_associative((a, _) in wide_value(), (b, _) in wide_value(), (c, _) in wide_value()) {
        prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
    }

    #[test]
    fn prop_mul_matches_oracle((a, oa) in wide_value(), (b, ob) in wide_value()) {
        let product = &a * &b;
        prop_assert_eq!(oracle_of(&product), &oa * &ob);
        prop_assert_eq!(&product, &(&b * &a));
        let expect_negative = a.to_bool() && b.to_bool() && (a.is_negative() != b.is_negative());
        prop_assert_eq!(product.is_negative(), expect_negative);
    }

    #[test]
    fn prop_div_mod_identity((a, _) in wide_value(), (b, _) in wide_value()) {
        prop_assume!(b.to_bool());
        let (q, r) = a.div_mod(&b).unwrap();
        prop_assert_eq!(&q * &b + &r, a.clone());
        prop_assert!(r.abs() < b.abs());
        prop_assert!(!r.to_bool() || r.is_negative() == a.is_negative());
    }

    #[test]
    fn prop_div_mod_matches_i128(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let (q, r) = BigInt::from(a).div_mod(&BigInt::from(b)).unwrap();
        prop_assert_eq!(q.to_str(), (a as i128 / b as i128).to_string());
        prop_assert_eq!(r.to_str(), (a as i128 % b as i128).to_string());
    }

    #[test]
    fn prop_div_by_small_divisor((a, oa) in wide_value(), d in 1_i64..1000) {
        let (q, r) = a.div_mod(&BigInt::from(d)).unwrap();
        prop_assert_eq!(oracle_of(&q), &oa / Oracle::from(d));
        prop_assert_eq!(oracle_of(&r), &oa % Oracle::from(d));
    }

    #[test]
    fn prop_shift_laws((a, _) in wide_value(), m in 0_i64..200, n in 0_i64..200) {
        prop_assert_eq!(&a >> 0, a.clone());
        prop_assert_eq!((&a >> m) >> n, &a >> (m + n));
    }

    #[test]
    fn prop_shift_matches_i128(v in any::<i64>(), n in 0_i64..70) {
        let magnitude = (v as i128).abs() >> n;
        let expected = if v < 0 { -magnitude } else { magnitude };
        prop_assert_eq!((BigInt::from(v) >> n).to_str(), expected.to_string());
    }

    #[test]
    fn prop_ordering_matches_oracle((a, oa) in wide_value(), (b, ob) in wide_value()) {
        prop_assert_eq!(a.cmp(&b), oa.cmp(&ob));
        prop_assert_eq!(a == b, oa == ob);
    }

    #[test]
    fn prop_bitand_low_bit(v in 0_i64..=i64::MAX) {
        prop_assert_eq!((BigInt::from(v) & BigInt::from(1)).to_i64(), Ok(v & 1));
        prop_assert_eq!((BigInt::from(v) & BigInt::from(0xffff)).to_i64(), Ok(v & 0xffff));
    }
}
