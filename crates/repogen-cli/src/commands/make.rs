//! Implementation of the `repogen make` command.
//!
//! Responsibility: translate CLI arguments into a `ScaffoldRequest`, wire the
//! production adapters into the core service, and display results.  No
//! generation logic lives here.

use tracing::{info, instrument};

use repogen_adapters::{
    AlwaysConfirm, ArtisanRunner, BuiltinStubs, DirStubs, LocalFilesystem, NeverConfirm,
    StubRenderer,
};
use repogen_core::{
    application::{
        ScaffoldReport, ScaffoldService,
        ports::{Confirmer, StubStore},
    },
    domain::ScaffoldRequest,
    error::{RepogenError, RepogenResult},
};

use crate::{
    cli::{GlobalArgs, MakeArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `repogen make` command.
///
/// Dispatch sequence:
/// 1. Validate the three class inputs (priority order lives in the core)
/// 2. Wire adapters and build the scaffold service
/// 3. Early-exit if `--dry-run`
/// 4. Run the generation sequence
/// 5. Report created/skipped files and the config update
#[instrument(skip_all)]
pub fn execute(
    args: MakeArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate inputs. Omitted options become blank strings so the core
    //    reports the missing field in its fixed order.
    let request = ScaffoldRequest::new(
        args.interface.as_deref().unwrap_or(""),
        args.repository.as_deref().unwrap_or(""),
        args.model.as_deref().unwrap_or(""),
    )
    .map_err(|e| CliError::Core(e.into()))?;
    let request = match &args.extends {
        Some(parent) => request.with_extends(parent),
        None => request,
    };

    // 2. Wire adapters.
    let stubs: Box<dyn StubStore> = match &config.paths.stubs_dir {
        Some(dir) => Box::new(DirStubs::new(dir)),
        None => Box::new(BuiltinStubs::new()),
    };
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(StubRenderer::new(stubs)),
        select_confirmer(&args, &global),
        Box::new(ArtisanRunner::new()),
        Box::new(ArtisanRunner::new()),
        config.layout(),
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let planned = service.plan(&request).map_err(CliError::Core)?;
        output.header("Dry run: no files will be written")?;
        for file in &planned {
            let marker = if file.already_exists { "exists" } else { "create" };
            output.print(&format!("  {marker}  {}", file.path.display()))?;
        }
        return Ok(());
    }

    // 4. Scaffold.
    info!(interface = %request.interface(), "Scaffold started");
    let report = service.scaffold(&request).map_err(CliError::Core)?;

    // 5. Report.
    if output.format() == OutputFormat::Json {
        println!("{}", render_json(&report)?);
        return Ok(());
    }

    for path in &report.created {
        output.success(&format!("created  {}", path.display()))?;
    }
    for path in &report.skipped {
        output.info(&format!("exists   {}", path.display()))?;
    }
    if report.config_updated {
        output.success(&format!(
            "updated  {}",
            config.paths.config_file.display()
        ))?;
    }
    output.success("Repository created successfully.")?;

    Ok(())
}

fn render_json(report: &ScaffoldReport) -> CliResult<String> {
    serde_json::to_string_pretty(report).map_err(|e| {
        CliError::Core(RepogenError::Internal {
            message: format!("report serialization failed: {e}"),
        })
    })
}

/// Pick the confirmation strategy for this invocation.
///
/// `--yes` answers every prompt with yes; `--quiet` must never block, so it
/// answers no; otherwise the user is asked on stdin.
fn select_confirmer(args: &MakeArgs, global: &GlobalArgs) -> Box<dyn Confirmer> {
    if args.yes {
        Box::new(AlwaysConfirm)
    } else if global.quiet {
        Box::new(NeverConfirm)
    } else {
        Box::new(StdinConfirmer)
    }
}

/// Interactive `[Y/n]` prompt; empty input counts as yes.
struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&self, prompt: &str) -> RepogenResult<bool> {
        use std::io::Write;

        print!("{prompt} [Y/n] ");
        std::io::stdout().flush().map_err(prompt_failed)?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .map_err(prompt_failed)?;

        let input = input.trim().to_ascii_lowercase();
        Ok(input.is_empty() || input == "y" || input == "yes")
    }
}

fn prompt_failed(e: std::io::Error) -> RepogenError {
    RepogenError::Internal {
        message: format!("confirmation prompt failed: {e}"),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn make_args(yes: bool) -> MakeArgs {
        MakeArgs {
            interface: Some("I".into()),
            repository: Some("R".into()),
            model: Some("M".into()),
            extends: None,
            yes,
            dry_run: false,
        }
    }

    fn global_args(quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn yes_flag_selects_the_always_confirmer() {
        let confirmer = select_confirmer(&make_args(true), &global_args(false));
        assert!(confirmer.confirm("?").unwrap());
    }

    #[test]
    fn quiet_mode_never_blocks_and_declines() {
        let confirmer = select_confirmer(&make_args(false), &global_args(true));
        assert!(!confirmer.confirm("?").unwrap());
    }

    #[test]
    fn omitted_options_surface_the_core_validation_order() {
        let err = ScaffoldRequest::new("", "R", "M").unwrap_err();
        assert_eq!(
            err,
            repogen_core::domain::DomainError::MissingInterfaceInput
        );
    }
}
