#![cfg(all(feature = "compose", feature = "effect"))]
//! `mdo!` agrees with hand-written binds.

use monadic::control::{Maybe, Sequence};
use monadic::effect::IO;
use monadic::typeclass::Monad;
use monadic::{mdo, sequence};
use proptest::prelude::*;

fn halve(n: i32) -> Maybe<i32> {
    Maybe::when(n % 2 == 0, n / 2)
}

fn neighbours(n: i32) -> Sequence<i32> {
    sequence![n.wrapping_sub(1), n.wrapping_add(1)]
}

proptest! {
    #[test]
    fn mdo_matches_maybe_binds(value: i32) {
        let with_macro = mdo! {
            half <= halve(value);
            quarter <= halve(half);
            Maybe::present(quarter.wrapping_add(half))
        };
        let by_hand = halve(value)
            .flat_map(|half| halve(half).flat_map(move |quarter| Maybe::present(quarter.wrapping_add(half))));

        prop_assert_eq!(with_macro, by_hand);
    }

    #[test]
    fn mdo_matches_sequence_binds(value: i32) {
        let with_macro = mdo! {
            first <= neighbours(value);
            second <= neighbours(first);
            sequence![second]
        };
        let by_hand = neighbours(value) >> neighbours;

        prop_assert_eq!(with_macro, by_hand);
    }

    #[test]
    fn mdo_matches_io_binds(value: i32) {
        let with_macro = mdo! {
            x <= IO::pure(value);
            let better = x.wrapping_add(1);
            IO::pure((x, better))
        };

        prop_assert_eq!(with_macro.into_inner(), (value, value.wrapping_add(1)));
    }
}

#[test]
fn mdo_wallet_chain() {
    let wallet_of = |user: u32| Maybe::when(user == 0xC001_D00D, 0x6361_7368_u32);
    let balance_of = |wallet: u32| Maybe::when(wallet == 0x6361_7368, 123.45);

    let purchase = |user: u32| {
        mdo! {
            wallet <= wallet_of(user);
            balance <= balance_of(wallet);
            let remaining = balance - 5.0;
            Maybe::when(remaining >= 0.0, remaining)
        }
    };

    assert_eq!(purchase(0xC001_D00D), Maybe::present(118.45));
    assert_eq!(purchase(0x1BAD_D00D), Maybe::absent());
}
