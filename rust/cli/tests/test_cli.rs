use std::io::Cursor;

fn run_cli(args: &[&str], input: &str) -> (i32, String, String) {
    let mut argv = vec!["holdem"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.to_string());
    let code = holdem_cli::run_with_input(argv, &mut out, &mut err, &mut stdin);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn no_command_prints_usage() {
    let (code, out, err) = run_cli(&[], "");
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Usage: holdem <command> [options]"), "{}", err);
}

#[test]
fn version_flag_succeeds() {
    let (code, out, _) = run_cli(&["--version"], "");
    assert_eq!(code, 0);
    assert!(out.starts_with("holdem "), "{}", out);
}

#[test]
fn eval_ranks_a_seven_card_hand() {
    let (code, out, err) = run_cli(&["eval", "Kh", "Kd", "Ks", "9c", "9d", "2s", "3h"], "");
    assert_eq!(code, 0, "{}", err);
    assert!(out.contains("Hand: Full House (K, 9)"), "{}", out);
    assert!(out.contains("Strength: 0.80"), "{}", out);
}

#[test]
fn eval_rejects_bad_notation() {
    let (code, _, err) = run_cli(&["eval", "As", "1x"], "");
    assert_eq!(code, 2);
    assert!(err.contains("invalid card notation"), "{}", err);
}

#[test]
fn deal_is_reproducible_by_seed() {
    let (code_a, first, _) = run_cli(&["deal", "--seed", "5"], "");
    let (code_b, second, _) = run_cli(&["deal", "--seed", "5"], "");
    assert_eq!((code_a, code_b), (0, 0));
    assert_eq!(first, second);
    assert!(first.starts_with("Seed: 5\n"));
    assert_eq!(first.lines().filter(|l| l.starts_with("Hole ")).count(), 4);
}

#[test]
fn sim_writes_sequential_hand_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    let path_str = path.to_string_lossy().into_owned();
    let (code, out, err) = run_cli(
        &["sim", "--hands", "8", "--seed", "3", "--output", &path_str],
        "",
    );
    assert_eq!(code, 0, "{}", err);
    assert!(out.contains("Total chips: 4000"), "{}", out);

    let contents = std::fs::read_to_string(&path).unwrap();
    for (i, line) in contents.lines().enumerate() {
        let record: holdem_engine::logger::HandRecord = serde_json::from_str(line).unwrap();
        assert!(record.hand_id.ends_with(&format!("-{:06}", i + 1)));
        assert_eq!(record.seed, Some(3));
        assert!(record.ts.is_some());
        assert!(record.showdown.is_some());
    }
}

#[test]
fn sim_is_reproducible_by_seed() {
    let (_, first, _) = run_cli(&["sim", "--hands", "20", "--seed", "8"], "");
    let (_, second, _) = run_cli(&["sim", "--hands", "20", "--seed", "8"], "");
    assert_eq!(first, second);
}

#[test]
fn play_folds_then_quits() {
    let (code, out, _) = run_cli(&["play", "--hands", "2", "--seed", "21"], "fold\nq\n");
    assert_eq!(code, 0);
    assert!(out.contains("Hand 1"));
    assert!(out.contains("You folded"), "{}", out);
    assert!(out.contains("Quit."));
    assert!(out.contains("Hands played: 1"), "{}", out);
    // folding before putting chips in costs nothing without blinds
    assert!(out.contains("\nYou: $1000\n"), "{}", out);
}

#[test]
fn play_rejects_zero_hands() {
    let (code, _, err) = run_cli(&["play", "--hands", "0"], "");
    assert_eq!(code, 2);
    assert!(err.contains("hands must be >= 1"));
}
