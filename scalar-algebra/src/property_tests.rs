//! Property-based checks of the ring and field laws each algebra promises.

use crate::{Integers, Octonion, Octonions, Quaternion, Quaternions};
use crate::traits::{Field, Normed, Ring};
use proptest::prelude::*;

fn quaternion_strategy() -> impl Strategy<Value = Quaternion<f64>> {
    prop::array::uniform4(-10.0f64..10.0).prop_map(|[r, i, j, k]| Quaternion::new(r, i, j, k))
}

fn octonion_strategy() -> impl Strategy<Value = Octonion<f64>> {
    prop::array::uniform8(-10.0f64..10.0).prop_map(Octonion::from_components)
}

proptest! {
    #[test]
    fn prop_wrapping_ring_laws(a: i8, b: i8, c: i8) {
        let z = Integers::<i8>::new();

        prop_assert_eq!(z.multiply(&a, &z.add(&b, &c)), z.add(&z.multiply(&a, &b), &z.multiply(&a, &c)));
        prop_assert_eq!(z.add(&z.add(&a, &b), &c), z.add(&a, &z.add(&b, &c)));
        prop_assert_eq!(z.multiply(&z.multiply(&a, &b), &c), z.multiply(&a, &z.multiply(&b, &c)));
        prop_assert!(z.is_zero(&z.add(&a, &z.negate(&a))));
    }

    #[test]
    fn prop_quaternion_norm_is_multiplicative(p in quaternion_strategy(), q in quaternion_strategy()) {
        let h = Quaternions::<f64>::new();
        let product = h.norm(&h.multiply(&p, &q));
        let expected = h.norm(&p) * h.norm(&q);

        prop_assert!((product - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    #[test]
    fn prop_quaternion_inverse(q in quaternion_strategy()) {
        let h = Quaternions::<f64>::with_tolerance(1e-9);
        prop_assume!(h.norm_squared(&q) > 1e-6);

        let inverse = h.invert(&q).unwrap();
        prop_assert!(h.is_unity(&h.multiply(&q, &inverse)));
        prop_assert!(h.is_unity(&h.multiply(&inverse, &q)));
    }

    #[test]
    fn prop_octonion_is_alternative(x in octonion_strategy(), y in octonion_strategy()) {
        let o = Octonions::<f64>::with_tolerance(1e-6);

        let left = o.multiply(&o.multiply(&x, &x), &y);
        let right = o.multiply(&x, &o.multiply(&x, &y));
        prop_assert!(o.is_equal(&left, &right));
    }
}

#[cfg(feature = "bignum")]
mod rational {
    use crate::Rationals;
    use crate::traits::{Field, Ring};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_rational_division_inverts_multiplication(
            n1 in -50i64..50, d1 in 1i64..50, n2 in -50i64..50, d2 in 1i64..50
        ) {
            prop_assume!(n2 != 0);
            let q = Rationals;
            let a = q.ratio(n1, d1).unwrap();
            let b = q.ratio(n2, d2).unwrap();

            let quotient = q.divide(&a, &b).unwrap();
            prop_assert_eq!(q.multiply(&quotient, &b), a);
        }
    }
}
