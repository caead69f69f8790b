//! Implementation of the `boilerplate-config keys` command.

use anyhow::Result;
use clap::Args;
use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{FieldSpec, Requirement, FIELDS};
use crate::infrastructure::config::ENV_PREFIX;

#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Only list variables that must be set
    #[arg(long)]
    pub required: bool,
}

#[derive(Debug, Serialize)]
pub struct KeyRow {
    pub variable: String,
    pub path: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub requirement: Requirement,
}

impl From<&FieldSpec> for KeyRow {
    fn from(field: &FieldSpec) -> Self {
        Self {
            variable: field.env_var(ENV_PREFIX),
            path: field.path,
            kind: field.kind.as_str(),
            requirement: field.requirement,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct KeysOutput {
    pub keys: Vec<KeyRow>,
}

impl KeysOutput {
    pub fn collect(required_only: bool) -> Self {
        let keys = FIELDS
            .iter()
            .filter(|field| !required_only || field.requirement == Requirement::Required)
            .map(KeyRow::from)
            .collect();
        Self { keys }
    }
}

impl CommandOutput for KeysOutput {
    fn to_human(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(vec![
                Cell::new("Variable").add_attribute(Attribute::Bold),
                Cell::new("Type").add_attribute(Attribute::Bold),
                Cell::new("Requirement").add_attribute(Attribute::Bold),
            ]);

        for row in &self.keys {
            let requirement = match row.requirement {
                Requirement::Required => "required",
                Requirement::Optional => "optional",
                Requirement::Derived => "derived",
            };
            table.add_row(vec![
                Cell::new(&row.variable),
                Cell::new(row.kind),
                Cell::new(requirement),
            ]);
        }

        table.to_string()
    }
}

pub fn execute(args: &KeysArgs, json_mode: bool) -> Result<()> {
    output(&KeysOutput::collect(args.required), json_mode);
    Ok(())
}
