//! Connection establishment behavior against a scripted broker fleet.
//!
//! The fleet fakes the dial and handshake capabilities: addresses can refuse
//! the dial, reset during the handshake, answer with a redirect, or accept.
//! Every dial and every observed `insist` flag is recorded so ordering and
//! budget semantics can be asserted.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use coney_client::config::ConnectionConfig;
use coney_client::connect::{Address, ConnectionFactory, Dial, Handshake, HandshakeOutcome};
use coney_client::redirect::Redirect;

#[derive(Default)]
struct Fleet {
    /// Addresses whose dial is refused.
    refuse: HashSet<Address>,
    /// Addresses whose handshake dies at the transport level.
    reset_handshake: HashSet<Address>,
    /// Addresses that answer every handshake with a redirect.
    redirects: HashMap<Address, Redirect>,
    /// Every dial attempted, in order.
    dialed: Mutex<Vec<Address>>,
    /// Every `insist` flag a handshake observed, in order.
    insists: Mutex<Vec<bool>>,
}

impl Fleet {
    fn dialed(&self) -> Vec<Address> {
        self.dialed.lock().expect("dial log lock").clone()
    }

    fn insists(&self) -> Vec<bool> {
        self.insists.lock().expect("insist log lock").clone()
    }
}

struct FleetDialer(Arc<Fleet>);

struct FleetHandshake(Arc<Fleet>);

struct FakeTransport {
    addr: Address,
}

impl Dial for FleetDialer {
    type Transport = FakeTransport;

    fn dial(&self, address: &Address) -> impl Future<Output = io::Result<FakeTransport>> + Send {
        let fleet = Arc::clone(&self.0);
        let addr = address.clone();
        async move {
            fleet.dialed.lock().expect("dial log lock").push(addr.clone());
            if fleet.refuse.contains(&addr) {
                return Err(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    format!("refused at {addr}"),
                ));
            }
            Ok(FakeTransport { addr })
        }
    }
}

impl Handshake<FakeTransport> for FleetHandshake {
    // The accepting endpoint stands in for an open connection.
    type Connection = Address;

    fn handshake(
        &self,
        transport: FakeTransport,
        _config: &ConnectionConfig,
        insist: bool,
    ) -> impl Future<Output = io::Result<HandshakeOutcome<Address>>> + Send {
        let fleet = Arc::clone(&self.0);
        async move {
            fleet.insists.lock().expect("insist log lock").push(insist);
            if fleet.reset_handshake.contains(&transport.addr) {
                return Err(io::Error::new(
                    io::ErrorKind::ConnectionReset,
                    format!("handshake reset at {}", transport.addr),
                ));
            }
            if let Some(redirect) = fleet.redirects.get(&transport.addr) {
                return Ok(HandshakeOutcome::Redirected(redirect.clone()));
            }
            Ok(HandshakeOutcome::Open(transport.addr))
        }
    }
}

fn factory(fleet: &Arc<Fleet>) -> ConnectionFactory<FleetDialer, FleetHandshake> {
    ConnectionFactory::new(
        ConnectionConfig::default(),
        FleetDialer(Arc::clone(fleet)),
        FleetHandshake(Arc::clone(fleet)),
    )
}

fn addr(host: &str) -> Address {
    Address::new(host, 5672)
}

#[tokio::test]
async fn single_viable_address_dials_exactly_once() {
    let fleet = Arc::new(Fleet::default());

    let conn = factory(&fleet)
        .establish(&[addr("a")], 0)
        .await
        .expect("lone healthy address connects");

    assert_eq!(conn, addr("a"));
    assert_eq!(fleet.dialed(), vec![addr("a")]);
}

#[tokio::test]
async fn candidates_are_tried_in_order_until_one_succeeds() {
    let mut fleet = Fleet::default();
    fleet.refuse.insert(addr("a"));
    fleet.refuse.insert(addr("b"));
    let fleet = Arc::new(fleet);

    let conn = factory(&fleet)
        .establish(&[addr("a"), addr("b"), addr("c")], 0)
        .await
        .expect("third candidate accepts");

    assert_eq!(conn, addr("c"));
    assert_eq!(fleet.dialed(), vec![addr("a"), addr("b"), addr("c")]);
}

#[tokio::test]
async fn redirect_is_followed_before_the_next_candidate() {
    let mut fleet = Fleet::default();
    fleet.redirects.insert(addr("a"), Redirect::to(addr("b")));
    let fleet = Arc::new(fleet);

    let conn = factory(&fleet)
        .establish(&[addr("a"), addr("z")], 1)
        .await
        .expect("redirect target accepts");

    assert_eq!(conn, addr("b"));
    // "z" never dialed: the redirect target short-circuits the outer list.
    assert_eq!(fleet.dialed(), vec![addr("a"), addr("b")]);
}

#[tokio::test]
async fn redirect_despite_insist_fails_the_whole_operation() {
    let mut fleet = Fleet::default();
    fleet.redirects.insert(addr("a"), Redirect::to(addr("b")));
    let fleet = Arc::new(fleet);

    let err = factory(&fleet)
        .establish(&[addr("a"), addr("c")], 0)
        .await
        .expect_err("peer broke the insist contract");

    assert!(err.is_protocol_violation(), "unexpected {err:?}");
    assert_eq!(err.address(), Some(&addr("a")));
    // With a zero budget the very first handshake already insisted.
    assert_eq!(fleet.insists(), vec![true]);
    // The viable "c" must not be consulted after a protocol violation.
    assert_eq!(fleet.dialed(), vec![addr("a")]);
}

#[tokio::test]
async fn known_alternates_are_tried_before_the_next_candidate() {
    let mut fleet = Fleet::default();
    fleet
        .redirects
        .insert(addr("a"), Redirect::new(addr("x"), vec![addr("c")]));
    fleet.refuse.insert(addr("x"));
    let fleet = Arc::new(fleet);

    let conn = factory(&fleet)
        .establish(&[addr("a")], 1)
        .await
        .expect("alternate from the redirect accepts");

    assert_eq!(conn, addr("c"));
    assert_eq!(fleet.dialed(), vec![addr("a"), addr("x"), addr("c")]);
}

#[tokio::test]
async fn last_dial_error_is_surfaced() {
    let mut fleet = Fleet::default();
    fleet.refuse.insert(addr("a"));
    fleet.refuse.insert(addr("b"));
    let fleet = Arc::new(fleet);

    let err = factory(&fleet)
        .establish(&[addr("a"), addr("b")], 0)
        .await
        .expect_err("every candidate refused");

    assert!(err.is_dial(), "unexpected {err:?}");
    assert_eq!(err.address(), Some(&addr("b")));
}

#[tokio::test]
async fn empty_candidate_list_reports_no_addresses() {
    let fleet = Arc::new(Fleet::default());

    let err = factory(&fleet)
        .establish(&[], 0)
        .await
        .expect_err("nothing to try");

    assert!(err.is_no_addresses(), "unexpected {err:?}");
}

#[tokio::test]
async fn handshake_transport_error_moves_to_the_next_candidate() {
    let mut fleet = Fleet::default();
    fleet.reset_handshake.insert(addr("a"));
    let fleet = Arc::new(fleet);

    let conn = factory(&fleet)
        .establish(&[addr("a"), addr("b")], 0)
        .await
        .expect("second candidate accepts");

    assert_eq!(conn, addr("b"));
    assert_eq!(fleet.dialed(), vec![addr("a"), addr("b")]);
}

#[tokio::test]
async fn redirect_budget_is_cumulative_across_fallback_recursion() {
    // "a" always redirects to the unreachable "x" while naming itself as the
    // only alternate. Each pass burns one hop from "a"; with a budget of two
    // the third handshake at "a" insists, and the still-redirecting peer is
    // reported as a protocol violation after exactly two hops.
    let mut fleet = Fleet::default();
    fleet
        .redirects
        .insert(addr("a"), Redirect::new(addr("x"), vec![addr("a")]));
    fleet.refuse.insert(addr("x"));
    let fleet = Arc::new(fleet);

    let err = tokio::time::timeout(
        Duration::from_secs(5),
        factory(&fleet).establish(&[addr("a")], 2),
    )
    .await
    .expect("a bounded budget must terminate")
    .expect_err("peer never stops redirecting");

    assert!(err.is_protocol_violation(), "unexpected {err:?}");
    assert_eq!(
        fleet.dialed(),
        vec![addr("a"), addr("x"), addr("a"), addr("x"), addr("a")]
    );
    assert_eq!(fleet.insists(), vec![false, false, true]);
}

#[tokio::test]
async fn fallback_failure_overwrites_the_candidate_error() {
    // Both the redirect target and the alternate refuse; the error surfaced
    // is the alternate's, the most recent attempt.
    let mut fleet = Fleet::default();
    fleet
        .redirects
        .insert(addr("a"), Redirect::new(addr("x"), vec![addr("y")]));
    fleet.refuse.insert(addr("x"));
    fleet.refuse.insert(addr("y"));
    let fleet = Arc::new(fleet);

    let err = factory(&fleet)
        .establish(&[addr("a")], 1)
        .await
        .expect_err("nothing reachable");

    assert!(err.is_dial(), "unexpected {err:?}");
    assert_eq!(err.address(), Some(&addr("y")));
}

#[tokio::test]
async fn protocol_violation_inside_a_fallback_aborts_everything() {
    // The alternate "b" self-redirects until its budget is spent, then keeps
    // redirecting; the resulting violation must not be retried against "z".
    let mut fleet = Fleet::default();
    fleet
        .redirects
        .insert(addr("a"), Redirect::new(addr("x"), vec![addr("b")]));
    fleet.redirects.insert(addr("b"), Redirect::to(addr("b")));
    fleet.refuse.insert(addr("x"));
    let fleet = Arc::new(fleet);

    let err = tokio::time::timeout(
        Duration::from_secs(5),
        factory(&fleet).establish(&[addr("a"), addr("z")], 1),
    )
    .await
    .expect("a bounded budget must terminate")
    .expect_err("fallback peer broke the insist contract");

    assert!(err.is_protocol_violation(), "unexpected {err:?}");
    assert_eq!(err.address(), Some(&addr("b")));
    assert!(
        !fleet.dialed().contains(&addr("z")),
        "violation must not fall through to later candidates: {:?}",
        fleet.dialed()
    );
}

#[tokio::test]
async fn convenience_overloads_wrap_a_single_candidate() {
    let fleet = Arc::new(Fleet::default());
    let factory = factory(&fleet);

    let conn = factory
        .connect_to("solo", 7777)
        .await
        .expect("direct host:port connects");
    assert_eq!(conn, Address::new("solo", 7777));

    let conn = factory
        .connect("bare")
        .await
        .expect("default-port host connects");
    assert_eq!(conn, Address::with_default_port("bare"));

    assert_eq!(
        fleet.dialed(),
        vec![Address::new("solo", 7777), Address::with_default_port("bare")]
    );
}
