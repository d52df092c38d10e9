//! Stanza editing command built on chseckit.

use anyhow::{Context as _, Result, bail};
use chseckit::{Editor, FileAttrs, FileAttributeReconciler, LocalReconciler, StanzaRequest};

use crate::Context;
use crate::cli::ApplyArgs;
use crate::report::{ApplyReport, ErrorReport};
use crate::ui;

pub fn run(ctx: &Context, args: ApplyArgs) -> Result<()> {
    let attrs = parse_attrs(&args)?;

    if !args.create && !args.path.exists() {
        bail!(
            "{} does not exist and --create is false",
            args.path.display()
        );
    }

    if ctx.verbose > 0 && !args.json {
        ui::dim(&format!(
            "editing stanza {} in {}",
            args.stanza,
            args.path.display()
        ));
    }

    let request = StanzaRequest::new(
        args.path.clone(),
        args.stanza.clone(),
        args.options.clone(),
        args.state.into(),
    );

    let editor = Editor::new().context("stanza editing requires the chsec utility")?;
    let mut result = match editor.apply(&request) {
        Ok(result) => result,
        Err(err) => {
            if args.json {
                println!("{}", serde_json::to_string(&ErrorReport::from(&err))?);
            }
            return Err(err).context("failed to apply stanza edit");
        }
    };

    // Ownership and permissions are reconciled only once the target
    // exists; chsec may have just created it.
    if !attrs.is_empty() && args.path.exists() {
        let attrs_changed = LocalReconciler
            .apply(&args.path, &attrs)
            .context("failed to reconcile file attributes")?;
        result.changed = result.changed || attrs_changed;
    }

    let report = ApplyReport {
        changed: result.changed,
        msg: result.msg,
        path: args.path,
    };

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else if !ctx.quiet {
        ui::success(&report.msg);
        ui::kv("path", &report.path.display().to_string());
        ui::kv("changed", if report.changed { "yes" } else { "no" });
    }

    Ok(())
}

fn parse_attrs(args: &ApplyArgs) -> Result<FileAttrs> {
    let mode = args.mode.as_deref().map(parse_mode).transpose()?;
    Ok(FileAttrs {
        owner: args.owner.clone(),
        group: args.group.clone(),
        mode,
    })
}

/// Permission bits are given in octal, with or without a leading zero.
fn parse_mode(mode: &str) -> Result<u32> {
    u32::from_str_radix(mode, 8).with_context(|| format!("invalid octal mode: {mode}"))
}
