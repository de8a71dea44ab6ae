use std::collections::{HashMap, HashSet};

use tui_memory::core::{deal, pick_pairs, DealRng, GameConfig, SymbolPool};
use tui_memory::types::{Difficulty, Symbol};

#[test]
fn every_difficulty_deals_each_symbol_exactly_twice() {
    let config = GameConfig::default();
    let pool = config.symbols.symbols();

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let pairs = config.pair_count(difficulty);
        for seed in 0..50 {
            let mut rng = DealRng::new(seed);
            let cards = deal(&pool, pairs, &mut rng).unwrap();
            assert_eq!(cards.len(), pairs * 2);

            let mut counts: HashMap<Symbol, usize> = HashMap::new();
            for card in &cards {
                assert!(!card.face_up);
                assert!(!card.matched);
                *counts.entry(card.symbol).or_default() += 1;
            }
            assert_eq!(counts.len(), pairs);
            assert!(counts.values().all(|&n| n == 2));
        }
    }
}

#[test]
fn same_seed_deals_same_table() {
    let pool = SymbolPool::default().symbols();
    let a = deal(&pool, 8, &mut DealRng::new(42)).unwrap();
    let b = deal(&pool, 8, &mut DealRng::new(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn whole_pool_can_be_requested() {
    let pool = SymbolPool::default().symbols();
    let mut rng = DealRng::new(3);
    let picked = pick_pairs(&pool, pool.len(), &mut rng).unwrap();
    let distinct: HashSet<_> = picked.iter().copied().collect();
    assert_eq!(distinct.len(), pool.len());
}

#[test]
fn zero_pairs_deals_empty_table() {
    let pool = SymbolPool::default().symbols();
    let cards = deal(&pool, 0, &mut DealRng::new(1)).unwrap();
    assert!(cards.is_empty());
}

#[test]
fn oversized_deal_is_an_error() {
    let pool = SymbolPool::new(["a", "b", "c"]).symbols();
    assert!(deal(&pool, 4, &mut DealRng::new(1)).is_err());
}

#[test]
fn every_symbol_eventually_picked() {
    let pool = SymbolPool::default().symbols();
    let mut seen = HashSet::new();
    let mut rng = DealRng::new(11);
    for _ in 0..200 {
        seen.extend(pick_pairs(&pool, 4, &mut rng).unwrap());
    }
    assert_eq!(seen.len(), pool.len());
}
