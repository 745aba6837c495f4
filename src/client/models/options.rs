// Raw generation form fields and the rules that turn them into GenerationOptions
use crate::common::models::{
    GenerationOptions, DEFAULT_MAX_CLAUSE_LENGTH, DEFAULT_MIN_CLAUSE_LENGTH, DEFAULT_NUM_CLAUSES,
    DEFAULT_NUM_VARS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    Vars,
    Clauses,
    MinClause,
    MaxClause,
    Seed,
}

/// Text exactly as typed into the generation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionFields {
    pub vars: String,
    pub clauses: String,
    pub min_clause: String,
    pub max_clause: String,
    pub seed: String,
}

impl OptionFields {
    pub fn set(&mut self, field: OptionField, value: String) {
        match field {
            OptionField::Vars => self.vars = value,
            OptionField::Clauses => self.clauses = value,
            OptionField::MinClause => self.min_clause = value,
            OptionField::MaxClause => self.max_clause = value,
            OptionField::Seed => self.seed = value,
        }
    }

    pub fn get(&self, field: OptionField) -> &str {
        match field {
            OptionField::Vars => &self.vars,
            OptionField::Clauses => &self.clauses,
            OptionField::MinClause => &self.min_clause,
            OptionField::MaxClause => &self.max_clause,
            OptionField::Seed => &self.seed,
        }
    }
}

/// Base-10 integer from a form field.
///
/// Surrounding whitespace is ignored and only the leading `[+-]?digits` run is
/// read, so `"12abc"` gives 12 while `"abc"`, `""` and `"   "` give `None`.
pub fn parse_int_or_none(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    let (sign, digits) = match trimmed.as_bytes().first().copied()? {
        b'+' => (1, &trimmed[1..]),
        b'-' => (-1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

pub fn collect_options(fields: &OptionFields) -> GenerationOptions {
    GenerationOptions {
        num_vars: parse_int_or_none(&fields.vars).unwrap_or(DEFAULT_NUM_VARS),
        num_clauses: parse_int_or_none(&fields.clauses).unwrap_or(DEFAULT_NUM_CLAUSES),
        min_clause_length: parse_int_or_none(&fields.min_clause).unwrap_or(DEFAULT_MIN_CLAUSE_LENGTH),
        max_clause_length: parse_int_or_none(&fields.max_clause).unwrap_or(DEFAULT_MAX_CLAUSE_LENGTH),
        seed: parse_int_or_none(&fields.seed),
    }
}
