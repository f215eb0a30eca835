//! Rules-file parser
//!
//! Each non-blank, non-`#` line of the rules file is tab-separated:
//!
//! ```text
//! Account:Path<TAB>pattern<TAB>[debit_min<TAB>debit_max<TAB>credit_min<TAB>credit_max]
//! ```
//!
//! Tabs (not spaces) delimit the fields, so account paths and patterns
//! may contain spaces. The numeric columns are optional from the right
//! and given in whole currency units; they are stored in minor units.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::error::RuleError;
use crate::rule::{Rule, AMOUNT_MAX};
use fiximports_utils::decimal_to_minor;

/// Account path and pattern: at least one non-tab character each
static FIELDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^\t]+)\t+([^\t]+)").unwrap());

/// One numeric column, comma accepted as decimal separator
static NUMBERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:[.,]\d+)?)\t?").unwrap());

/// Parse one rule line
///
/// Returns `Ok(None)` for a line that does not have the two mandatory
/// fields (logged as a warning so incomplete lines never abort a load),
/// and an error when the pattern field is not a valid regex.
pub fn parse_rule(line: &str) -> Result<Option<Rule>, RuleError> {
    let caps = match FIELDS.captures(line) {
        Some(caps) => caps,
        None => {
            log::warn!("Ignoring rule line (incorrect format): {:?}", line);
            return Ok(None);
        }
    };

    // Both groups are guaranteed by the FIELDS pattern
    let account_field = caps.get(1).unwrap().as_str();
    let pattern_field = caps.get(2).unwrap();

    let pattern =
        Regex::new(pattern_field.as_str()).map_err(|source| RuleError::InvalidPattern {
            line: line.to_string(),
            pattern: pattern_field.as_str().to_string(),
            source,
        })?;

    let account_path: Vec<String> = account_field.split(':').map(|s| s.to_string()).collect();

    // Scan up to four numeric columns past the pattern field, assigned
    // positionally; missing trailing columns stay unset
    let mut bounds: [Option<i64>; 4] = [None; 4];
    let remainder = &line[pattern_field.end()..];
    for (slot, num) in bounds.iter_mut().zip(NUMBERS.captures_iter(remainder)) {
        let text = num.get(1).unwrap().as_str().replace(',', ".");
        if let Ok(value) = Decimal::from_str(&text) {
            *slot = decimal_to_minor(value);
        }
    }

    let [debit_min, debit_max, credit_min, credit_max] = bounds;
    let debit_min = debit_min.unwrap_or(0);
    let credit_min = credit_min.unwrap_or(0);
    // An unset maximum, or one not above its minimum, means unbounded
    let debit_max = match debit_max {
        Some(max) if max > debit_min => max,
        _ => AMOUNT_MAX,
    };
    let credit_max = match credit_max {
        Some(max) if max > credit_min => max,
        _ => AMOUNT_MAX,
    };

    Ok(Some(Rule {
        pattern,
        account_path,
        debit_min,
        debit_max,
        credit_min,
        credit_max,
    }))
}

/// Load all rules from a file, in file order
///
/// Blank lines and lines starting with `#` are skipped. Malformed lines
/// are warned about and skipped; an invalid pattern fails the load.
pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<Vec<Rule>, RuleError> {
    let content = std::fs::read_to_string(path)?;
    let mut rules = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(rule) = parse_rule(line)? {
            rules.push(rule);
        }
    }
    Ok(rules)
}

// ==================== Tests ====================
