//! # Calculation Session
//!
//! A `Session` holds every layout calculated during one run, in the order
//! they were entered. Layouts are appended and never edited or removed;
//! they are addressed by their 1-based position, which is what the user
//! types when asked "Which layout?".
//!
//! ## Structure
//!
//! ```text
//! Session
//! ├── units: UnitSystem (what the user typed dimensions in)
//! ├── started: DateTime<Utc>
//! └── layouts: Vec<SheetLayout> (append-only)
//!     └── SheetLayout { id, number, created, result }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rivet_core::calculations::rivet_layout;
//! use rivet_core::session::Session;
//! use rivet_core::units::UnitSystem;
//!
//! let mut session = Session::new(UnitSystem::Inches);
//! session.add_layout(rivet_layout(10.0, 5.0, 0.1, 4.0, 2.0));
//! session.add_layout(rivet_layout(20.0, 5.0, 0.1, 4.0, 2.0));
//!
//! let selection = session.select("2").unwrap();
//! assert_eq!(selection.layout.number, 2);
//! assert!(!selection.fell_back);
//!
//! // Anything that is not a valid number falls back to the first layout
//! let selection = session.select("seven").unwrap();
//! assert_eq!(selection.layout.number, 1);
//! assert!(selection.fell_back);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::LayoutResult;
use crate::errors::{RivetError, RivetResult};
use crate::units::UnitSystem;

/// All layouts calculated in one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unit system dimensions were entered in
    pub units: UnitSystem,

    /// When the session was started
    pub started: DateTime<Utc>,

    layouts: Vec<SheetLayout>,
}

/// One stored layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetLayout {
    pub id: Uuid,

    /// 1-based position in the session
    pub number: usize,

    pub created: DateTime<Utc>,

    pub result: LayoutResult,
}

/// The layout a question will be answered against.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub layout: &'a SheetLayout,

    /// True when the choice was invalid and the first layout was used
    pub fell_back: bool,
}

impl Selection<'_> {
    pub fn result(&self) -> &LayoutResult {
        &self.layout.result
    }
}

impl Session {
    /// Create an empty session.
    pub fn new(units: UnitSystem) -> Self {
        Session {
            units,
            started: Utc::now(),
            layouts: Vec::new(),
        }
    }

    /// Append a layout. Returns its 1-based number.
    pub fn add_layout(&mut self, result: LayoutResult) -> usize {
        let number = self.layouts.len() + 1;
        let layout = SheetLayout {
            id: Uuid::new_v4(),
            number,
            created: Utc::now(),
            result,
        };
        tracing::debug!(number, id = %layout.id, "stored layout");
        self.layouts.push(layout);
        number
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// All layouts in entry order
    pub fn layouts(&self) -> &[SheetLayout] {
        &self.layouts
    }

    /// Get a layout by its 1-based number.
    pub fn get(&self, number: usize) -> Option<&SheetLayout> {
        number.checked_sub(1).and_then(|index| self.layouts.get(index))
    }

    /// Whether the user has to pick a layout before asking a question
    pub fn needs_selection(&self) -> bool {
        self.layouts.len() > 1
    }

    /// Pick the layout a question refers to.
    ///
    /// With a single layout the choice is ignored. Otherwise `choice` must be
    /// a string of ASCII digits naming a layout in `1..=len`; anything else
    /// selects the first layout and sets `fell_back`.
    pub fn select(&self, choice: &str) -> RivetResult<Selection<'_>> {
        let first = self.layouts.first().ok_or(RivetError::SessionEmpty)?;
        if !self.needs_selection() {
            return Ok(Selection {
                layout: first,
                fell_back: false,
            });
        }

        let choice = choice.trim();
        let chosen = if !choice.is_empty() && choice.bytes().all(|b| b.is_ascii_digit()) {
            choice.parse::<usize>().ok().and_then(|number| self.get(number))
        } else {
            None
        };

        Ok(match chosen {
            Some(layout) => Selection {
                layout,
                fell_back: false,
            },
            None => {
                tracing::warn!(choice, "invalid layout number, using the first layout");
                Selection {
                    layout: first,
                    fell_back: true,
                }
            }
        })
    }

    /// One line per layout: "Layout N: Total rivets = T (Length a x Width b)"
    pub fn summary_lines(&self) -> Vec<String> {
        self.layouts
            .iter()
            .map(|layout| {
                format!(
                    "Layout {}: Total rivets = {} (Length {} x Width {})",
                    layout.number,
                    layout.result.total_rivets,
                    layout.result.rivets_along_length,
                    layout.result.rivets_along_width
                )
            })
            .collect()
    }

    /// Serialize the whole session as pretty JSON.
    pub fn to_json_pretty(&self) -> RivetResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RivetError::serialization(e.to_string()))
    }
}
