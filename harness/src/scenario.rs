//! Scenario files: a planning problem as bracketed text sections.
//!
//! # Format
//!
//! ```text
//! # sliding puzzle
//! [Initial]
//! 1, 2, 3
//! 4, 0, 6
//! 7, 5, 8
//! [Goal]
//! 1 2 3
//! 4 5 6
//! 7 8 0
//! ```
//!
//! `[EstadoInicial]` and `[EstadoObjetivo]` are accepted as aliases of
//! `[Initial]` and `[Goal]`. A blocks-world scenario adds a `[Blocks]` (alias `[Bloques]`) section with
//! a comma-separated block list, and its initial and goal sections hold one
//! `pred(args)=true|false` assignment per line. Every atom must name declared
//! blocks; `mesa` is accepted as a support and in `clear`.
//!
//! Blank lines and lines starting with `#` are ignored everywhere. A section
//! runs until the next `[` line. Line numbers in errors are 1-based.

use std::path::Path;

use waypoint_kernel::carrier::atom::Atom;
use waypoint_kernel::carrier::atom_state::{AtomGoal, AtomState};
use waypoint_kernel::carrier::grid::GridState;
use waypoint_kernel::KernelError;

use waypoint_search::PlanningDomain;

use crate::worlds::blocks_world::BlocksWorld;

/// A loaded, validated planning problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scenario {
    Puzzle {
        initial: GridState,
        goal: GridState,
    },
    Blocks {
        world: BlocksWorld,
        initial: AtomState,
        goal: AtomGoal,
    },
}

/// Error loading a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// The file could not be read.
    Io { detail: String },
    /// A required section is absent or has no content lines.
    MissingSection { section: &'static str },
    /// A line could not be parsed.
    Malformed { line: usize, detail: String },
    /// The parsed values do not form a valid state.
    Kernel(KernelError),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingSection { section } => {
                write!(f, "section [{section}] is missing or empty")
            }
            Self::Malformed { line, detail } => write!(f, "line {line}: {detail}"),
            Self::Kernel(e) => write!(f, "invalid scenario: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Kernel(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KernelError> for ScenarioError {
    fn from(e: KernelError) -> Self {
        Self::Kernel(e)
    }
}

/// Canonical section names.
const INITIAL: &str = "Initial";
const GOAL: &str = "Goal";
const BLOCKS: &str = "Blocks";

/// Map a header (without brackets) to its canonical section name.
fn canonical_section(header: &str) -> Option<&'static str> {
    match header {
        "Initial" | "EstadoInicial" => Some(INITIAL),
        "Goal" | "EstadoObjetivo" => Some(GOAL),
        "Blocks" | "Bloques" => Some(BLOCKS),
        _ => None,
    }
}

/// One content line with its 1-based line number.
type Line<'a> = (usize, &'a str);

#[derive(Default)]
struct Sections<'a> {
    initial: Vec<Line<'a>>,
    goal: Vec<Line<'a>>,
    blocks: Option<Vec<Line<'a>>>,
}

impl<'a> Sections<'a> {
    fn split(text: &'a str) -> Result<Self, ScenarioError> {
        let mut sections = Self::default();
        let mut seen: Vec<&'static str> = Vec::new();
        let mut current: Option<&'static str> = None;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if trimmed.starts_with('[') {
                let header = trimmed
                    .strip_prefix('[')
                    .and_then(|h| h.strip_suffix(']'))
                    .map(str::trim)
                    .ok_or_else(|| malformed(line, format!("malformed section header '{trimmed}'")))?;
                let name = canonical_section(header)
                    .ok_or_else(|| malformed(line, format!("unknown section [{header}]")))?;
                if seen.contains(&name) {
                    return Err(malformed(line, format!("section [{header}] appears twice")));
                }
                seen.push(name);
                if name == BLOCKS {
                    sections.blocks = Some(Vec::new());
                }
                current = Some(name);
                continue;
            }
            let target = match current {
                Some(INITIAL) => &mut sections.initial,
                Some(GOAL) => &mut sections.goal,
                Some(_) => sections.blocks.get_or_insert_with(Vec::new),
                None => {
                    return Err(malformed(line, "content before the first section header"));
                }
            };
            target.push((line, trimmed));
        }
        Ok(sections)
    }
}

fn malformed(line: usize, detail: impl Into<String>) -> ScenarioError {
    ScenarioError::Malformed {
        line,
        detail: detail.into(),
    }
}

fn require<'s, 'a>(lines: &'s [Line<'a>], section: &'static str) -> Result<&'s [Line<'a>], ScenarioError> {
    if lines.is_empty() {
        Err(ScenarioError::MissingSection { section })
    } else {
        Ok(lines)
    }
}

/// Tokens of a line split on commas and whitespace.
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

fn parse_grid(lines: &[Line<'_>]) -> Result<GridState, ScenarioError> {
    let rows = lines
        .iter()
        .map(|&(line, text)| {
            tokens(text)
                .map(|t| {
                    t.parse::<u32>()
                        .map_err(|_| malformed(line, format!("'{t}' is not a tile number")))
                })
                .collect::<Result<Vec<u32>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    GridState::new(rows).map_err(ScenarioError::from)
}

fn parse_bool(line: usize, text: &str) -> Result<bool, ScenarioError> {
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(malformed(line, format!("'{text}' is not true or false")))
    }
}

fn parse_assignments(lines: &[Line<'_>]) -> Result<Vec<(Atom, bool)>, ScenarioError> {
    lines
        .iter()
        .map(|&(line, text)| -> Result<(Atom, bool), ScenarioError> {
            let (atom, value) = text
                .rsplit_once('=')
                .ok_or_else(|| malformed(line, format!("expected 'pred(args)=value', got '{text}'")))?;
            let atom: Atom = atom
                .parse()
                .map_err(|e: KernelError| malformed(line, e.to_string()))?;
            Ok((atom, parse_bool(line, value.trim())?))
        })
        .collect()
}

impl Scenario {
    /// Read and parse a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Scenario::parse`].
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|e| ScenarioError::Io {
            detail: format!("{}: {e}", path.display()),
        })?;
        Self::parse(&text)
    }

    /// Parse scenario text. The presence of a blocks section selects the
    /// blocks world; otherwise the text is a sliding puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError`] on a missing section, unparseable line, or
    /// invalid state.
    pub fn parse(text: &str) -> Result<Self, ScenarioError> {
        let sections = Sections::split(text)?;
        let initial = require(&sections.initial, INITIAL)?;
        let goal = require(&sections.goal, GOAL)?;

        match &sections.blocks {
            None => Ok(Self::Puzzle {
                initial: parse_grid(initial)?,
                goal: parse_grid(goal)?,
            }),
            Some(blocks) => {
                let names: Vec<&str> = require(blocks, BLOCKS)?
                    .iter()
                    .flat_map(|&(_, text)| tokens(text))
                    .collect();
                let world = BlocksWorld::new(names)?;
                let initial = AtomState::new(parse_assignments(initial)?)?;
                let goal = AtomGoal::new(parse_assignments(goal)?)?;
                world.validate_problem(&initial, &goal)?;
                Ok(Self::Blocks {
                    world,
                    initial,
                    goal,
                })
            }
        }
    }

    /// Domain identifier of the scenario's world.
    #[must_use]
    pub fn domain_id(&self) -> &'static str {
        match self {
            Self::Puzzle { .. } => crate::worlds::sliding_puzzle::DOMAIN_ID,
            Self::Blocks { .. } => crate::worlds::blocks_world::DOMAIN_ID,
        }
    }
}
