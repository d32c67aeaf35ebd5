//! TOML station content parser.
//!
//! Loads station content from TOML files and directories, and validates it.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::ContentError;
use crate::model::{Scene, StationContent, Task, TaskKind, MAX_ANSWERS, MAX_OPTIONS};

/// Intermediate TOML structure for parsing station content files.
#[derive(Debug, Deserialize)]
struct TomlStationFile {
    station: TomlStationHeader,
    #[serde(default)]
    tasks: Vec<TomlTask>,
    #[serde(default)]
    scenes: Vec<TomlScene>,
}

#[derive(Debug, Deserialize)]
struct TomlStationHeader {
    id: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TomlTaskKind {
    Quiz,
    FreeAnswer,
}

#[derive(Debug, Deserialize)]
struct TomlTask {
    kind: TomlTaskKind,
    prompt: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    correct: Option<usize>,
    #[serde(default)]
    answers: Vec<String>,
    #[serde(default)]
    hint: Option<String>,
    #[serde(default)]
    why: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlScene {
    title: String,
    #[serde(default)]
    narrative: Vec<String>,
    prompt: String,
    explain: String,
}

/// Content for one station, keyed by its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationFile {
    pub station_id: u8,
    pub content: StationContent,
}

/// Parse a single TOML file into a `StationFile`.
pub fn parse_station_file(path: &Path) -> Result<StationFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read station file: {}", path.display()))?;

    parse_station_str(&content, path)
}

/// Parse a TOML string into a `StationFile` (also used for embedded content).
pub fn parse_station_str(content: &str, source_path: &Path) -> Result<StationFile> {
    let parsed: TomlStationFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let station_id = parsed.station.id;

    if !parsed.tasks.is_empty() && !parsed.scenes.is_empty() {
        return Err(ContentError::MixedContent {
            station: station_id,
        })
        .with_context(|| format!("invalid station content: {}", source_path.display()));
    }

    let content = if parsed.scenes.is_empty() {
        let tasks = parsed
            .tasks
            .into_iter()
            .enumerate()
            .map(|(i, t)| convert_task(i + 1, t))
            .collect::<Result<Vec<_>, ContentError>>()
            .with_context(|| format!("invalid station content: {}", source_path.display()))?;
        StationContent::Tasks(tasks)
    } else {
        StationContent::Story(
            parsed
                .scenes
                .into_iter()
                .map(|s| Scene {
                    title: s.title,
                    narrative: s.narrative,
                    prompt: s.prompt,
                    explain: s.explain,
                })
                .collect(),
        )
    };

    Ok(StationFile {
        station_id,
        content,
    })
}

/// Check the hard limits of a task and convert it. `number` is 1-based.
fn convert_task(number: usize, t: TomlTask) -> Result<Task, ContentError> {
    let kind = match t.kind {
        TomlTaskKind::Quiz => {
            if !t.answers.is_empty() {
                return Err(ContentError::MisplacedField {
                    task: number,
                    field: "answers",
                    kind: "quiz",
                });
            }
            if t.options.is_empty() {
                return Err(ContentError::NoOptions { task: number });
            }
            if t.options.len() > MAX_OPTIONS {
                return Err(ContentError::TooManyOptions {
                    task: number,
                    count: t.options.len(),
                });
            }
            let correct = t.correct.unwrap_or(0);
            if correct == 0 || correct > t.options.len() {
                return Err(ContentError::CorrectOutOfRange {
                    task: number,
                    correct,
                    count: t.options.len(),
                });
            }
            TaskKind::Quiz {
                options: t.options,
                correct: correct - 1,
            }
        }
        TomlTaskKind::FreeAnswer => {
            if !t.options.is_empty() || t.correct.is_some() {
                return Err(ContentError::MisplacedField {
                    task: number,
                    field: if t.options.is_empty() {
                        "correct"
                    } else {
                        "options"
                    },
                    kind: "free_answer",
                });
            }
            if t.answers.is_empty() {
                return Err(ContentError::NoAnswers { task: number });
            }
            if t.answers.len() > MAX_ANSWERS {
                return Err(ContentError::TooManyAnswers {
                    task: number,
                    count: t.answers.len(),
                });
            }
            TaskKind::FreeAnswer { answers: t.answers }
        }
    };

    Ok(Task {
        prompt: t.prompt,
        kind,
        hint: t.hint,
        why: t.why,
    })
}

/// Recursively load all `.toml` station files from a directory.
pub fn load_content_directory(dir: &Path) -> Result<Vec<StationFile>> {
    let mut files = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            files.extend(load_content_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_station_file(&path) {
                Ok(file) => files.push(file),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(files)
}

/// A warning from station content validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based task or scene number (if applicable).
    pub item: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate station content for issues that do not prevent running it.
pub fn validate_station_content(content: &StationContent) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if content.is_empty() {
        warnings.push(ValidationWarning {
            item: None,
            message: "station has no tasks or scenes".into(),
        });
    }

    match content {
        StationContent::Tasks(tasks) => {
            for (i, task) in tasks.iter().enumerate() {
                let item = Some(i + 1);
                if task.prompt.trim().is_empty() {
                    warnings.push(ValidationWarning {
                        item,
                        message: "prompt is empty".into(),
                    });
                }
                if task.why.as_deref().map_or(true, |w| w.trim().is_empty()) {
                    warnings.push(ValidationWarning {
                        item,
                        message: "no explanation; a placeholder will be shown".into(),
                    });
                }
                let (label, values) = match &task.kind {
                    TaskKind::Quiz { options, .. } => ("option", options),
                    TaskKind::FreeAnswer { answers } => ("answer", answers),
                };
                let mut seen = HashSet::new();
                for value in values {
                    if !seen.insert(value.trim().to_lowercase()) {
                        warnings.push(ValidationWarning {
                            item,
                            message: format!("duplicate {label}: {value}"),
                        });
                    }
                }
            }
        }
        StationContent::Story(scenes) => {
            for (i, scene) in scenes.iter().enumerate() {
                if scene.prompt.trim().is_empty() || scene.explain.trim().is_empty() {
                    warnings.push(ValidationWarning {
                        item: Some(i + 1),
                        message: "scene prompt or explanation is empty".into(),
                    });
                }
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[station]
id = 9

[[tasks]]
kind = "quiz"
prompt = "What does `*p` do when p is an int*?"
options = ["Takes the address", "Dereferences p", "Multiplies"]
correct = 2
hint = "Think of following an arrow."
why = "The unary * operator reads the object p points at."

[[tasks]]
kind = "free_answer"
prompt = "Which operator yields an object's address?"
answers = ["&", "ampersand"]
why = "& produces a pointer to its operand."
"#;

    fn parse(toml: &str) -> Result<StationFile> {
        parse_station_str(toml, &PathBuf::from("test.toml"))
    }

    #[test]
    fn parse_valid_toml() {
        let file = parse(VALID_TOML).unwrap();
        assert_eq!(file.station_id, 9);
        let StationContent::Tasks(tasks) = &file.content else {
            panic!("expected tasks");
        };
        assert_eq!(tasks.len(), 2);
        assert_eq!(
            tasks[0].kind,
            TaskKind::Quiz {
                options: vec![
                    "Takes the address".into(),
                    "Dereferences p".into(),
                    "Multiplies".into()
                ],
                correct: 1,
            }
        );
        assert_eq!(tasks[1].hint, None);
        assert!(validate_station_content(&file.content).is_empty());
    }

    #[test]
    fn parse_story() {
        let toml = r#"
[station]
id = 2

[[scenes]]
title = "Wake up"
narrative = ["You are source text."]
prompt = "What does a compiler do?"
explain = "Translates ahead of time."
"#;
        let file = parse(toml).unwrap();
        let StationContent::Story(scenes) = file.content else {
            panic!("expected story");
        };
        assert_eq!(scenes[0].title, "Wake up");
        assert_eq!(scenes[0].narrative.len(), 1);
    }

    #[test]
    fn header_only_is_empty_content() {
        let file = parse("[station]\nid = 4\n").unwrap();
        assert!(file.content.is_empty());
        let warnings = validate_station_content(&file.content);
        assert!(warnings.iter().any(|w| w.message.contains("no tasks")));
    }

    #[test]
    fn reject_correct_out_of_range() {
        let toml = r#"
[station]
id = 3

[[tasks]]
kind = "quiz"
prompt = "Pick"
options = ["a", "b"]
correct = 3
"#;
        let err = parse(toml).unwrap_err();
        let cause = err.downcast_ref::<ContentError>().unwrap();
        assert_eq!(
            *cause,
            ContentError::CorrectOutOfRange {
                task: 1,
                correct: 3,
                count: 2
            }
        );
    }

    #[test]
    fn reject_too_many_options() {
        let toml = r#"
[station]
id = 3

[[tasks]]
kind = "quiz"
prompt = "Pick"
options = ["a", "b", "c", "d", "e", "f"]
correct = 1
"#;
        let err = parse(toml).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ContentError>(),
            Some(ContentError::TooManyOptions { count: 6, .. })
        ));
    }

    #[test]
    fn reject_free_answer_without_answers() {
        let toml = r#"
[station]
id = 3

[[tasks]]
kind = "free_answer"
prompt = "Say it"
"#;
        let err = parse(toml).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ContentError>(),
            Some(ContentError::NoAnswers { task: 1 })
        ));
    }

    #[test]
    fn reject_mixed_content() {
        let toml = r#"
[station]
id = 2

[[tasks]]
kind = "free_answer"
prompt = "Say it"
answers = ["it"]

[[scenes]]
title = "t"
prompt = "p"
explain = "e"
"#;
        let err = parse(toml).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ContentError>(),
            Some(ContentError::MixedContent { station: 2 })
        ));
    }

    #[test]
    fn reject_misplaced_fields() {
        let toml = r#"
[station]
id = 3

[[tasks]]
kind = "free_answer"
prompt = "Say it"
answers = ["it"]
options = ["it"]
"#;
        assert!(parse(toml).is_err());
    }

    #[test]
    fn validate_duplicates_and_missing_why() {
        let toml = r#"
[station]
id = 3

[[tasks]]
kind = "free_answer"
prompt = "Say it"
answers = ["it", "IT"]
"#;
        let file = parse(toml).unwrap();
        let warnings = validate_station_content(&file.content);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate answer")));
        assert!(warnings.iter().any(|w| w.message.contains("no explanation")));
        assert!(warnings.iter().all(|w| w.item == Some(1)));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse(bad).is_err());
    }

    #[test]
    fn load_directory_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pointers.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("broken.toml"), "nope = [").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let nested = dir.path().join("more");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("empty.toml"), "[station]\nid = 5\n").unwrap();

        let files = load_content_directory(dir.path()).unwrap();
        let mut ids: Vec<u8> = files.iter().map(|f| f.station_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn load_directory_requires_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("x.toml");
        std::fs::write(&file, VALID_TOML).unwrap();
        assert!(load_content_directory(&file).is_err());
    }
}
