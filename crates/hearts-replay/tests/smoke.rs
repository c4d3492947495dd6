use std::fs;
use std::path::Path;

use hearts_engine::action::MoveRequest;
use hearts_engine::game::Phase;
use hearts_engine::model::deck::Deck;
use hearts_replay::config::ReplayConfig;
use hearts_replay::replay::{ReplayRunner, ReplaySummary};
use tempfile::tempdir;

fn load_config(dir: &Path) -> ReplayConfig {
    let yaml = format!(
        r#"
run_id: "test_smoke"
game:
  seed: 4242
moves: "{moves}"
outputs:
  summary_json: "{summary}"
logging:
  enable_structured: false
"#,
        moves = dir.join("{run_id}.jsonl").display(),
        summary = dir.join("out/{run_id}/summary.json").display(),
    );

    let mut cfg: ReplayConfig = serde_yaml::from_str(&yaml).expect("valid yaml");
    cfg.validate().expect("config validates");
    cfg
}

/// Unshuffled deal, every seat passes left, then the first trick.
fn first_trick_moves() -> String {
    let mut lines = vec![serde_json::to_string(&MoveRequest::deal(&Deck::standard())).unwrap()];
    for seat in 0..4 {
        lines.push(format!(r#"{{"kind":"Pass","player":{seat},"cards":[0,1,2]}}"#));
    }
    for (seat, card) in [(1, 3), (2, 3), (3, 3), (0, 4)] {
        lines.push(format!(r#"{{"kind":"Play","player":{seat},"card":{card}}}"#));
    }
    lines.join("\n")
}

#[test]
fn replay_smoke_test_writes_summary() {
    let dir = tempdir().expect("temp dir");
    let config = load_config(dir.path());
    let outputs = config.resolved_outputs();
    fs::write(&outputs.moves, first_trick_moves()).expect("moves written");

    let result = ReplayRunner::new(config, outputs).run().expect("replay completes");
    let summary = &result.summary;

    assert_eq!(summary.moves_applied, 9);
    assert_eq!(summary.moves_rejected, 0);
    assert_eq!(summary.deals, 1);
    assert_eq!(summary.game.phase, Phase::Play);
    assert_eq!(summary.game.active, [true, false, false, false]);
    assert_eq!(summary.game.hand_sizes, [12; 4]);
    assert_eq!(summary.game.round_points, [0; 4]);

    assert!(
        result.summary_path.ends_with("out/test_smoke/summary.json"),
        "summary path should be templated"
    );
    let written = fs::read_to_string(&result.summary_path).expect("summary readable");
    let decoded: ReplaySummary = serde_json::from_str(&written).expect("summary decodes");
    assert_eq!(&decoded, summary);
}

#[test]
fn missing_moves_file_is_an_io_error() {
    let dir = tempdir().expect("temp dir");
    let config = load_config(dir.path());
    let outputs = config.resolved_outputs();

    let err = ReplayRunner::new(config, outputs)
        .run()
        .err()
        .expect("moves file is absent");
    assert!(err.to_string().starts_with("I/O error"));
}
