//! Unique identifier generation

use std::collections::HashSet;
use uuid::Uuid;

/// Source of fresh identifiers for categories and prompts
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs in simple (hyphen-less) form
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic `"{prefix}{n}"` ids, counting up from 1
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    prefix: String,
    next: u64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialGenerator {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Draw ids until one is not in `taken`, then reserve it.
pub fn mint_unique(
    generator: &mut dyn IdGenerator,
    prefix: &str,
    taken: &mut HashSet<String>,
) -> String {
    loop {
        let candidate = format!("{}{}", prefix, generator.next_id());
        if taken.insert(candidate.clone()) {
            return candidate;
        }
    }
}
