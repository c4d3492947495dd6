use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use hearts_engine::action::{Action, Deal, MoveRequest};
use hearts_engine::error::HeartsError;
use hearts_engine::game::{GameState, GameSummary, Phase, dispatch};
use hearts_engine::model::deck::Deck;
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{ReplayConfig, ResolvedOutputs};

/// Feeds a file of move requests through the engine.
pub struct ReplayRunner {
    config: ReplayConfig,
    outputs: ResolvedOutputs,
}

/// Final state plus counters for the run, written as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplaySummary {
    pub run_id: String,
    pub seed: u64,
    pub moves_applied: usize,
    pub moves_rejected: usize,
    pub deals: usize,
    pub game: GameSummary,
}

/// Where a finished run left its artifacts.
pub struct RunSummary {
    pub summary: ReplaySummary,
    pub summary_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to write summary: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("line {line}: not a move request: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: {kind} rejected: {source}")]
    Rejected {
        line: usize,
        kind: &'static str,
        #[source]
        source: HeartsError,
    },
}

struct Progress {
    state: GameState,
    rng: StdRng,
    moves_applied: usize,
    moves_rejected: usize,
    deals: usize,
}

impl ReplayRunner {
    pub fn new(config: ReplayConfig, outputs: ResolvedOutputs) -> Self {
        Self { config, outputs }
    }

    /// Replays the configured moves file and writes the summary JSON.
    pub fn run(&self) -> Result<RunSummary, ReplayError> {
        let file = File::open(&self.outputs.moves)?;
        let summary = self.replay(BufReader::new(file))?;

        ensure_parent(self.outputs.summary_json.parent())?;
        let mut writer = BufWriter::new(File::create(&self.outputs.summary_json)?);
        serde_json::to_writer_pretty(&mut writer, &summary)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(RunSummary {
            summary,
            summary_path: self.outputs.summary_json.clone(),
        })
    }

    /// Replays one JSON move request per line. Blank lines and lines starting
    /// with `#` are skipped.
    pub fn replay<R: BufRead>(&self, reader: R) -> Result<ReplaySummary, ReplayError> {
        let game = &self.config.game;
        let mut progress = Progress {
            state: GameState::with_rules(game.rules()),
            rng: StdRng::seed_from_u64(game.seed),
            moves_applied: 0,
            moves_rejected: 0,
            deals: 0,
        };

        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let request =
                MoveRequest::from_json(trimmed).map_err(|source| ReplayError::Decode {
                    line: line_no,
                    source,
                })?;
            self.apply(&mut progress, line_no, request)?;
        }

        let summary = ReplaySummary {
            run_id: self.config.run_id.clone(),
            seed: game.seed,
            moves_applied: progress.moves_applied,
            moves_rejected: progress.moves_rejected,
            deals: progress.deals,
            game: GameSummary::capture(&progress.state),
        };
        event!(
            Level::INFO,
            run_id = %summary.run_id,
            applied = summary.moves_applied,
            rejected = summary.moves_rejected,
            phase = %summary.game.phase,
            "replay finished"
        );
        Ok(summary)
    }

    fn apply(
        &self,
        progress: &mut Progress,
        line: usize,
        request: MoveRequest,
    ) -> Result<(), ReplayError> {
        let is_deal = matches!(request, MoveRequest::Deal { .. });
        if self.config.game.auto_deal && !is_deal && progress.state.phase() == Phase::Deal {
            let deck = Deck::shuffled(&mut progress.rng);
            dispatch(Action::from(Deal::from(deck)), &mut progress.state).map_err(|source| {
                ReplayError::Rejected {
                    line,
                    kind: "Deal",
                    source,
                }
            })?;
            progress.deals += 1;
            event!(
                Level::DEBUG,
                line,
                round = progress.state.round_number(),
                "seeded deck dealt"
            );
        }

        let kind = request.kind();
        let outcome = request
            .into_action()
            .and_then(|action| dispatch(action, &mut progress.state).map(|_| ()));

        match outcome {
            Ok(()) => {
                progress.moves_applied += 1;
                if is_deal {
                    progress.deals += 1;
                }
                event!(
                    Level::DEBUG,
                    line,
                    kind,
                    phase = %progress.state.phase(),
                    active = ?progress.state.active_seats(),
                    "move applied"
                );
                Ok(())
            }
            Err(source) if self.config.replay.stop_on_error => Err(ReplayError::Rejected {
                line,
                kind,
                source,
            }),
            Err(source) => {
                progress.moves_rejected += 1;
                event!(
                    Level::WARN,
                    line,
                    kind,
                    error_kind = ?source.kind(),
                    message = source.message(),
                    "move rejected"
                );
                Ok(())
            }
        }
    }
}

fn ensure_parent(path: Option<&Path>) -> Result<(), ReplayError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
