use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use picart_common::currency::{parse_ether, Wei};
use picart_common::product::{Catalog, ItemId};
use picart_common::storefront::CartSession;

use picart_checkout_integration::{assert_invariants, ids, picture, two_picture_catalog};

fn five_picture_catalog() -> Catalog {
    Catalog::new(vec![
        picture(1, "Sunset", "0.001"),
        picture(2, "Mountain", "0.002"),
        picture(3, "Beach", "0.003"),
        picture(4, "Flower", "0.004"),
        picture(5, "Ancient", "0.005"),
    ])
    .unwrap()
}

/// Random valid add/remove sequences never break the session invariants.
#[test]
fn random_valid_transitions_preserve_invariants() {
    let catalog = five_picture_catalog();
    let mut rng = StdRng::seed_from_u64(0x9c_a7);

    for _ in 0..200 {
        let mut session = CartSession::new(&catalog);
        for _ in 0..30 {
            let add = session.is_empty() || (!session.available().is_empty() && rng.gen_bool(0.5));
            session = if add {
                let pick = rng.gen_range(0..session.available().len());
                let id = session.available()[pick].id;
                session.add_to_cart(id).unwrap()
            } else {
                let pick = rng.gen_range(0..session.cart().len());
                let id = session.cart()[pick].id;
                session.remove_from_cart(id).unwrap()
            };
            assert_invariants(&session, catalog.items());
        }
    }
}

/// Random sequences including invalid calls: rejected calls change nothing.
#[test]
fn invalid_transitions_leave_session_unchanged() {
    let catalog = five_picture_catalog();
    let mut rng = StdRng::seed_from_u64(7);
    let mut session = CartSession::new(&catalog);

    for _ in 0..500 {
        let id = ItemId(rng.gen_range(0..8));
        let result = if rng.gen_bool(0.5) {
            session.add_to_cart(id)
        } else {
            session.remove_from_cart(id)
        };
        if let Ok(next) = result {
            session = next;
        }
        assert_invariants(&session, catalog.items());
    }
}

/// add(x) then remove(x) gives back the same session, from any reachable state.
#[test]
fn add_then_remove_round_trips() {
    let catalog = five_picture_catalog();
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = CartSession::new(&catalog);

    for _ in 0..100 {
        if let Some(last) = session.available().last() {
            let id = last.id;
            let round_trip = session
                .add_to_cart(id)
                .unwrap()
                .remove_from_cart(id)
                .unwrap();
            assert_eq!(round_trip, session);
        }
        if !session.available().is_empty() {
            let pick = rng.gen_range(0..session.available().len());
            let id = session.available()[pick].id;
            let round_trip = session.add_to_cart(id).unwrap().remove_from_cart(id).unwrap();
            assert_eq!(round_trip.cart(), session.cart());
            assert_eq!(round_trip.total(), session.total());
            let mut before = ids(session.available());
            let mut after = ids(round_trip.available());
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);
        }

        // Wander to another reachable state.
        let in_cart = session.cart().first().map(|item| item.id);
        let on_shelf = session.available().first().map(|item| item.id);
        match (in_cart, on_shelf) {
            (Some(id), _) if rng.gen_bool(0.4) => session = session.remove_from_cart(id).unwrap(),
            (_, Some(id)) => session = session.add_to_cart(id).unwrap(),
            (Some(id), None) => session = session.remove_from_cart(id).unwrap(),
            (None, None) => {}
        }
    }
}

#[test]
fn worked_example_two_pictures() {
    let s0 = CartSession::new(&two_picture_catalog());

    let s1 = s0.add_to_cart(ItemId(1)).unwrap();
    assert_eq!((ids(s1.cart()), ids(s1.available())), (vec![1], vec![2]));
    assert_eq!(s1.total(), parse_ether("0.001").unwrap());

    let s2 = s1.add_to_cart(ItemId(2)).unwrap();
    assert_eq!((ids(s2.cart()), ids(s2.available())), (vec![1, 2], vec![]));
    assert_eq!(s2.total(), parse_ether("0.003").unwrap());

    let s3 = s2.remove_from_cart(ItemId(1)).unwrap();
    assert_eq!((ids(s3.cart()), ids(s3.available())), (vec![2], vec![1]));
    assert_eq!(s3.total(), parse_ether("0.002").unwrap());

    let s4 = s3.remove_from_cart(ItemId(2)).unwrap();
    assert_eq!(s4.total(), Wei::ZERO);
}
