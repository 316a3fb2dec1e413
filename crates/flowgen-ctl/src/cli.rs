// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "flowgen")]
#[command(version)]
#[command(about = "Convert n8n workflows to JavaScript and refactor the result")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(
        about = "Generate JavaScript for a workflow",
        after_help = "Examples:\n    flowgen convert --workflow-id 42\n    flowgen convert --file flow.json --intent \"use const\" --no-ai"
    )]
    Convert(ConvertArgs),
    #[command(
        about = "Refactor existing generated code",
        after_help = "Example:\n    flowgen refactor --code-file main.js --intent \"use const\""
    )]
    Refactor(RefactorArgs),
    #[command(about = "List workflows in the store")]
    List(ListArgs),
    #[command(about = "Report advisory warnings for a workflow")]
    Validate(SourceArgs),
    #[command(about = "Print the JSON Schema of the workflow document")]
    Schema,
}

/// Where to read a workflow from.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Workflow id in the store (N8N_URL)
    #[arg(long)]
    pub workflow_id: Option<String>,

    /// Workflow JSON document on disk
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Refactor switches shared by `convert` and `refactor`.
#[derive(Debug, Args)]
pub struct IntentArgs {
    /// Free-form refactoring instruction
    #[arg(long)]
    pub intent: Option<String>,

    /// Skip the AI stage even when OPENAI_API_KEY is set
    #[arg(long)]
    pub no_ai: bool,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub intent: IntentArgs,

    /// Write the code to this path instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RefactorArgs {
    /// Code to refactor; stdin when omitted
    #[arg(long)]
    pub code_file: Option<PathBuf>,

    #[command(flatten)]
    pub intent: IntentArgs,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only active (true) or inactive (false) workflows
    #[arg(long)]
    pub active: Option<bool>,

    /// Filter by workflow name
    #[arg(long)]
    pub name: Option<String>,

    /// Page size
    #[arg(long)]
    pub limit: Option<u32>,

    /// Continuation cursor from a previous page
    #[arg(long)]
    pub cursor: Option<String>,

    /// Print the raw page as JSON
    #[arg(long)]
    pub json: bool,
}
