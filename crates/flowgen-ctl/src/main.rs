// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Flowgen CLI
//!
//! Converts n8n workflows to JavaScript and refactors generated code.
//!
//! ```text
//! flowgen convert --workflow-id 42 [--intent <text>] [--no-ai] [--output main.js]
//! flowgen convert --file flow.json
//! flowgen refactor --code-file main.js --intent "use const"
//! flowgen list [--active true] [--name <name>] [--limit <n>] [--cursor <c>] [--json]
//! flowgen validate --file flow.json
//! flowgen schema
//! ```
//!
//! Generated code goes to stdout; logs go to stderr (`RUST_LOG`, default
//! `warn`). A `.env` file in the working directory is loaded if present.

mod cli;

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use flowgen_dsl::{Workflow, parse_workflow_str, workflow_json_schema};
use flowgen_management_sdk::{ListWorkflowsOptions, WorkflowStoreClient};
use flowgen_workflows::{RefactorIntent, Refactorer, translate_workflow, validate_workflow};
use tracing::{debug, info};

use cli::{Cli, Command, ConvertArgs, IntentArgs, ListArgs, RefactorArgs, SourceArgs};

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = dotenv {
        debug!("No .env file loaded: {}", e);
    }

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Convert(args) => convert(args).await,
        Command::Refactor(args) => refactor(args).await,
        Command::List(args) => list(args).await,
        Command::Validate(args) => validate(args).await,
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&workflow_json_schema())?);
            Ok(())
        }
    }
}

async fn load_workflow(source: &SourceArgs) -> Result<Workflow> {
    if let Some(path) = &source.file {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading workflow file {}", path.display()))?;
        return parse_workflow_str(&json).map_err(anyhow::Error::msg);
    }

    let id = source
        .workflow_id
        .as_deref()
        .context("either --workflow-id or --file is required")?;
    let client = WorkflowStoreClient::from_env()?;
    info!(workflow_id = %id, base_url = %client.config().base_url, "Fetching workflow");
    Ok(client.fetch_workflow(id).await?)
}

fn intent_of(args: &IntentArgs) -> Option<RefactorIntent> {
    args.intent
        .as_ref()
        .map(|text| RefactorIntent::new(text.clone()).with_ai(!args.no_ai))
}

fn refactorer_for(intent: Option<&RefactorIntent>) -> Refactorer {
    match intent {
        Some(intent) if intent.use_ai => Refactorer::from_env(),
        _ => Refactorer::rules_only(),
    }
}

async fn convert(args: ConvertArgs) -> Result<()> {
    let workflow = load_workflow(&args.source).await?;
    let intent = intent_of(&args.intent);
    let refactorer = refactorer_for(intent.as_ref());

    let result = translate_workflow(&workflow, intent.as_ref(), &refactorer).await;
    for warning in &result.warnings {
        eprintln!("warning: {}", warning);
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &result.code)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!(
                "Wrote {} nodes to {}",
                result.node_count,
                path.display()
            );
        }
        None => println!("{}", result.code),
    }
    Ok(())
}

async fn refactor(args: RefactorArgs) -> Result<()> {
    let code = match &args.code_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading code from stdin")?;
            buf
        }
    };

    let intent = intent_of(&args.intent).unwrap_or_else(|| RefactorIntent::new(""));
    let refactorer = refactorer_for(Some(&intent));
    let code = refactorer.refactor_with(&code, &intent).await;
    print!("{}", code);
    Ok(())
}

async fn list(args: ListArgs) -> Result<()> {
    let client = WorkflowStoreClient::from_env()?;

    let mut options = ListWorkflowsOptions::new();
    if let Some(active) = args.active {
        options = options.with_active(active);
    }
    if let Some(name) = args.name {
        options = options.with_name(name);
    }
    if let Some(limit) = args.limit {
        options = options.with_limit(limit);
    }
    if let Some(cursor) = args.cursor {
        options = options.with_cursor(cursor);
    }

    let page = client.list_workflows(options).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    for workflow in &page.data {
        let updated = workflow
            .updated_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12} {:<8} {:<17} {}",
            workflow.id,
            if workflow.active { "active" } else { "inactive" },
            updated,
            workflow.name
        );
    }
    if let Some(cursor) = &page.next_cursor {
        eprintln!("More results: --cursor {}", cursor);
    }
    Ok(())
}

async fn validate(args: SourceArgs) -> Result<()> {
    let workflow = load_workflow(&args).await?;
    let result = validate_workflow(&workflow);

    if !result.has_warnings() {
        println!("OK: {} nodes, no warnings", workflow.nodes.len());
        return Ok(());
    }
    for warning in &result.warnings {
        println!("{}", warning);
    }
    Ok(())
}
