//! Behavioral tests through the public API.

use std::collections::VecDeque;

use nexus_recycle::{Disposable, QueueError, RecyclingQueue};
use proptest::prelude::*;

#[test]
fn capacity_three_rejects_fourth() {
    let mut queue = RecyclingQueue::bounded(3);
    assert!(queue.offer('a'));
    assert!(queue.offer('b'));
    assert!(queue.offer('c'));
    assert!(!queue.offer('d'));
    assert_eq!(queue.len(), 3);
}

#[test]
fn lone_node_is_released_without_floor() {
    let mut queue = RecyclingQueue::new();
    queue.offer(1u32);
    queue.poll();
    queue.offer(2);

    let stats = queue.stats();
    assert_eq!(stats.recycled, 0);
    assert_eq!(stats.allocated, 2);
}

#[test]
fn lone_node_is_reused_with_floor() {
    let mut queue = RecyclingQueue::with_limits(0, 5);
    queue.offer(1u32);
    queue.poll();
    queue.offer(2);

    let stats = queue.stats();
    assert_eq!(stats.recycled, 1);
    assert_eq!(stats.allocated, 1);
    assert_eq!(stats.reused, 1);
}

#[test]
fn clear_trims_pool_of_five_to_two() {
    let mut queue: RecyclingQueue<u32> = RecyclingQueue::<u32>::builder()
        .min_retained(2)
        .prewarm(5)
        .build();
    assert_eq!(queue.pooled(), 5);

    queue.offer(1);
    queue.clear();

    assert_eq!(queue.pooled(), 2);
    assert!(queue.is_empty());
}

#[test]
fn clear_without_floor_discards_pool() {
    let mut queue: RecyclingQueue<u32> = RecyclingQueue::<u32>::builder().prewarm(5).build();
    queue.offer(1);
    queue.clear();

    assert_eq!(queue.pooled(), 0);
    assert_eq!(queue.stats().owned_nodes(), 0);
}

#[test]
fn exhausted_drain_empties_queue() {
    let mut queue: RecyclingQueue<u32> = (0..10).collect();
    assert_eq!(queue.drain().count(), 10);
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.poll(), None);
}

#[test]
fn drain_sees_offers_made_between_steps() {
    let mut queue = RecyclingQueue::new();
    queue.offer(1);

    let mut seen = Vec::new();
    loop {
        let next = queue.drain().next();
        let Some(v) = next else { break };
        seen.push(v);
        if v < 3 {
            queue.offer(v + 1);
        }
    }

    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn unsupported_regardless_of_contents() {
    let mut empty: RecyclingQueue<u8> = RecyclingQueue::new();
    let mut full: RecyclingQueue<u8> = (0..4).collect();

    for queue in [&mut empty, &mut full] {
        let before = queue.len();
        assert!(matches!(
            queue.contains(&0),
            Err(QueueError::Unsupported { operation: "contains" })
        ));
        assert!(matches!(
            queue.remove_all([0u8]),
            Err(QueueError::Unsupported { operation: "remove_all" })
        ));
        assert!(matches!(
            queue.retain_all(&[0u8]),
            Err(QueueError::Unsupported { operation: "retain_all" })
        ));
        assert_eq!(queue.len(), before);
    }
}

#[test]
fn renders_like_a_list() {
    let mut queue = RecyclingQueue::new();
    assert_eq!(queue.to_string(), "[]");
    queue.offer(1);
    queue.offer(2);
    assert_eq!(queue.to_string(), "[1, 2]");
}

#[test]
fn works_through_capability_trait() {
    fn relay<Q: Disposable<String>>(queue: &mut Q, words: &[&str]) -> Vec<String> {
        for w in words {
            queue.offer((*w).to_owned());
        }
        let head = queue.peek().cloned();
        let mut out: Vec<String> = queue.drain().collect();
        if let Some(h) = head {
            assert_eq!(out[0], h);
        }
        out.push(queue.len().to_string());
        out
    }

    let mut queue = RecyclingQueue::new();
    assert_eq!(relay(&mut queue, &["a", "b"]), vec!["a", "b", "0"]);
}

#[derive(Clone, Debug)]
enum Op {
    Offer(u32),
    Poll,
    Peek,
    Clear,
    SetMin(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => any::<u32>().prop_map(Op::Offer),
        4 => Just(Op::Poll),
        1 => Just(Op::Peek),
        1 => Just(Op::Clear),
        1 => (0usize..8).prop_map(Op::SetMin),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_matches_vecdeque_model(
        capacity in 0usize..16,
        min_retained in 0usize..8,
        ops in proptest::collection::vec(op_strategy(), 0..256),
    ) {
        let mut queue = RecyclingQueue::with_limits(capacity, min_retained);
        let mut model: VecDeque<u32> = VecDeque::new();

        for op in ops {
            match op {
                Op::Offer(v) => {
                    let accepted = capacity == 0 || model.len() < capacity;
                    prop_assert_eq!(queue.offer(v), accepted);
                    if accepted {
                        model.push_back(v);
                    }
                }
                Op::Poll => prop_assert_eq!(queue.poll(), model.pop_front()),
                Op::Peek => {
                    let len = queue.len();
                    prop_assert_eq!(queue.peek(), model.front());
                    prop_assert_eq!(queue.len(), len);
                }
                Op::Clear => {
                    let floor = queue.min_retained();
                    let pooled_before = queue.pooled();
                    let live_before = queue.len();
                    let expected = if pooled_before >= floor {
                        floor
                    } else {
                        floor.min(pooled_before + live_before)
                    };

                    queue.clear();
                    model.clear();
                    prop_assert_eq!(queue.pooled(), expected);
                }
                Op::SetMin(n) => queue.set_min_retained(n),
            }

            prop_assert_eq!(queue.len(), model.len());
            let stats = queue.stats();
            prop_assert_eq!(stats.owned_nodes(), (queue.len() + queue.pooled()) as u64);
        }

        let drained: Vec<u32> = queue.drain().collect();
        let expected: Vec<u32> = model.into_iter().collect();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn prop_steady_churn_stops_allocating(
        min_retained in 1usize..8,
        rounds in 1usize..200,
    ) {
        let mut queue = RecyclingQueue::with_limits(0, min_retained);
        for i in 0..rounds {
            prop_assert!(queue.offer(i));
            prop_assert_eq!(queue.poll(), Some(i));
        }
        prop_assert_eq!(queue.stats().allocated, 1);
        prop_assert_eq!(queue.stats().released, 0);
    }
}
