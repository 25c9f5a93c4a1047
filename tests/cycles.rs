mod common;

use common::{RhoMap, RunawayMap};

use weakprf::adapter::{DomainAdapter, SelfMap};
use weakprf::prf::Aes128Prf;
use weakprf::{floyd, nivasch};

#[test]
fn floyd_finds_collision_behind_the_tail() {
    let f = RhoMap { mu: 5, lambda: 7 };

    let (x0, x1) = floyd::find_collision(&f, 0).unwrap();

    // the cycle entry has exactly two preimages: the last tail point and the
    // last cycle point
    assert_ne!(x0, x1);
    assert_eq!(f.calc(x0), f.calc(x1));
    assert_eq!((x0, x1), (4, 11));
}

#[test]
fn floyd_finds_collision_on_long_tail() {
    let f = RhoMap {
        mu: 1000,
        lambda: 337,
    };

    let (x0, x1) = floyd::find_collision(&f, 0).unwrap();

    assert_ne!(x0, x1);
    assert_eq!(f.calc(x0), f.calc(x1));
}

#[test]
fn floyd_degenerates_when_start_is_on_the_cycle() {
    let f = RhoMap { mu: 0, lambda: 7 };

    // no second preimage is reachable from inside the cycle
    assert_eq!(floyd::find_collision(&f, 3).unwrap(), (3, 3));
}

#[test]
fn floyd_degenerates_on_a_fixed_point() {
    let f = RhoMap { mu: 0, lambda: 1 };

    assert_eq!(floyd::find_collision(&f, 0).unwrap(), (0, 0));
}

#[test]
fn floyd_reports_exhaustion_instead_of_hanging() {
    assert_eq!(
        floyd::find_collision(&RunawayMap, 0),
        Err(floyd::Error::DomainExhausted)
    );
}

#[test]
fn nivasch_returns_a_point_on_the_cycle() {
    let f = RhoMap { mu: 5, lambda: 7 };

    let x = nivasch::find_cycle(&f, 3, 0).unwrap();
    assert!(f.on_cycle(x));

    // on-cycle means the point recurs under iteration
    let mut walk = f.calc(x);
    for _ in 1..f.lambda {
        walk = f.calc(walk);
    }
    assert_eq!(walk, x);
}

#[test]
fn nivasch_handles_a_single_stack() {
    let f = RhoMap {
        mu: 1000,
        lambda: 337,
    };

    let x = nivasch::find_cycle(&f, 1, 0).unwrap();
    assert!(f.on_cycle(x));
}

#[test]
fn nivasch_rejects_zero_stacks() {
    let f = RhoMap { mu: 5, lambda: 7 };

    assert_eq!(
        nivasch::find_cycle(&f, 0, 0),
        Err(nivasch::Error::InvalidStackCount)
    );
}

#[test]
fn nivasch_reports_exhaustion_instead_of_hanging() {
    assert_eq!(
        nivasch::find_cycle(&RunawayMap, 3, 0),
        Err(nivasch::Error::DomainExhausted)
    );
}

// Keys and expected values below were cross-checked against an independent
// implementation of the oracle construction.

#[test]
fn nivasch_recovers_known_cycle_point_from_keyed_oracle() {
    let key = [
        0xf7, 0xf2, 0x26, 0x1c, 0x61, 0x6d, 0x8f, 0x4e, 0x7c, 0x39, 0xa1, 0x00, 0x4e, 0xd3, 0x40,
        0x22,
    ];
    let prf = Aes128Prf::new(key, 4).unwrap();
    let f = DomainAdapter::new(&prf).unwrap();

    assert_eq!(nivasch::find_cycle(&f, 100, 0).unwrap(), 8391269);
}

#[test]
fn floyd_recovers_known_collision_from_keyed_oracle() {
    let key = [
        0xde, 0xa4, 0xf3, 0x6c, 0x99, 0x7e, 0x13, 0xed, 0xf5, 0x16, 0xe4, 0x23, 0xc1, 0xa4, 0xef,
        0x04,
    ];
    let prf = Aes128Prf::new(key, 4).unwrap();
    let f = DomainAdapter::new(&prf).unwrap();

    let (x0, x1) = floyd::find_collision(&f, 0).unwrap();

    assert_eq!((x0, x1), (2412172755, 3856073417));
    assert_eq!(f.calc(x0), 3421566065);
    assert_eq!(f.calc(x1), 3421566065);
}
