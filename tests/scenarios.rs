//! Concrete key sets with known optimal trees

use obst::{build_obst, reconstruct, InputError, ObstError, ObstSolver, SolverConfig};
use test_case::test_case;

#[test_case(&["Amor", "Carro", "Xilofone", "Zebra"], &[0.40, 0.30, 0.10, 0.20], 1.8, 2 ; "four words")]
#[test_case(&["only"], &[1.0], 1.0, 1 ; "single key")]
#[test_case(&["A", "B"], &[0.5, 0.5], 1.5, 1 ; "two key tie keeps lowest index")]
#[test_case(&["a", "b", "c"], &[0.3, 0.3, 0.3], 1.5, 2 ; "uniform keys balance")]
#[test_case(&["a", "b", "c"], &[0.7, 0.2, 0.1], 1.4, 1 ; "skewed keys chain right")]
#[test_case(&["a", "b", "c"], &[0.0, 0.0, 0.0], 0.0, 1 ; "zero mass ties everywhere")]
fn optimal_cost_and_root(keys: &[&str], p: &[f64], cost: f64, root: usize) {
    let tables = build_obst(keys, p).expect("valid input");
    assert!(
        (tables.optimal_cost() - cost).abs() < 1e-9,
        "cost {} != {}",
        tables.optimal_cost(),
        cost
    );
    assert_eq!(tables.optimal_root(), Some(root));

    let tree = reconstruct(&tables, keys, p, 1, keys.len()).expect("reconstruction");
    assert_eq!(tree.root().map(|node| node.key), Some(root));
    assert_eq!(tree.in_order_keys().into_iter().copied().collect::<Vec<_>>(), keys);
}

#[test_case(&[], &[], InputError::Empty ; "empty")]
#[test_case(&["a", "b"], &[0.5], InputError::LengthMismatch { keys: 2, probabilities: 1 } ; "length mismatch")]
#[test_case(&["a", "b"], &[0.5, -0.25], InputError::NegativeProbability { index: 2, value: -0.25 } ; "negative")]
#[test_case(&["b", "a"], &[0.5, 0.5], InputError::UnsortedKeys { index: 2 } ; "unsorted")]
#[test_case(&["a", "a"], &[0.5, 0.5], InputError::UnsortedKeys { index: 2 } ; "duplicate")]
#[test_case(&["a", "b"], &[0.5, f64::INFINITY], InputError::NonFiniteProbability { index: 2 } ; "infinite")]
#[test_case(&["a", "b"], &[0.75, 0.5], InputError::ProbabilityMassExceeded { total: 1.25 } ; "too much mass")]
fn invalid_input_is_rejected(keys: &[&str], p: &[f64], expected: InputError) {
    assert_eq!(build_obst(keys, p), Err(expected.clone()));

    let err = ObstSolver::new(keys, p, SolverConfig::default())
        .run()
        .expect_err("solver must reject");
    assert_eq!(err, ObstError::InvalidInput(expected));
}

#[test]
fn words_tree_listing() {
    let keys = ["Amor", "Carro", "Xilofone", "Zebra"];
    let p = [0.40, 0.30, 0.10, 0.20];
    let tables = build_obst(&keys, &p).unwrap();
    let tree = reconstruct(&tables, &keys, &p, 1, 4).unwrap();

    let rows: Vec<(&str, Option<&str>, usize, String)> = tree
        .nodes()
        .iter()
        .map(|node| {
            (
                *tree.key(node),
                tree.parent_key(node).copied(),
                node.depth,
                format!("{:.2}", node.cost),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Carro", None, 1, "0.30".to_string()),
            ("Amor", Some("Carro"), 2, "0.80".to_string()),
            ("Zebra", Some("Carro"), 2, "0.40".to_string()),
            ("Xilofone", Some("Zebra"), 3, "0.30".to_string()),
        ]
    );
}

#[test]
fn skewed_keys_form_a_right_chain() {
    let keys = [1, 2, 3];
    let p = [0.7, 0.2, 0.1];
    let solution = ObstSolver::new(&keys, &p, SolverConfig::default())
        .run()
        .unwrap();

    for (key, depth) in [(1, 1), (2, 2), (3, 3)] {
        assert_eq!(solution.tree.depth_of(&key), Some(depth));
    }
    assert!(solution.tree.nodes().iter().all(|node| node.left.is_none()));
}

#[test]
fn sub_interval_cost_matches_table() {
    let keys = ["Amor", "Carro", "Xilofone", "Zebra"];
    let p = [0.40, 0.30, 0.10, 0.20];
    let tables = build_obst(&keys, &p).unwrap();

    for i in 1..=4 {
        for j in i..=4 {
            let tree = reconstruct(&tables, &keys, &p, i, j).unwrap();
            let expected = tables.cost(i, j).unwrap();
            assert!((tree.expected_cost() - expected).abs() < 1e-9, "[{}, {}]", i, j);
            assert_eq!(tree.len(), j - i + 1);
        }
    }
}
