use std::fmt;

use anyhow::{Context, anyhow};
use bandmatch_common::config::Config;
use bandmatch_common::log::{PRINT_TARGET, SUCCESS_TARGET};
use bandmatch_core::scope::SCOPE_TARGET;
use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

pub struct BandmatchFormatter;

impl<S, N> FormatEvent<S, N> for BandmatchFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            return writeln!(writer, "{}", visitor.message);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match *meta.level() {
                _ if meta.target() == SUCCESS_TARGET => ("[+]", |s| s.green().bold()),
                Level::TRACE => ("[ ]", |s| s.dimmed()),
                Level::DEBUG => ("[?]", |s| s.blue()),
                Level::INFO => ("[~]", |s| s.cyan()),
                Level::WARN => ("[*]", |s| s.yellow().bold()),
                Level::ERROR => ("[-]", |s| s.red().bold()),
            };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Pulls the bare `message` field out of an event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

/// Filter used when `RUST_LOG` is not set.
///
/// The level comes from `-v`; scope diagnostics are on unless `-qq` is given.
pub fn default_filter(cfg: &Config) -> anyhow::Result<EnvFilter> {
    let scope_level: &str = if cfg.show_scope() { "debug" } else { "off" };
    let directives = format!("{},{SCOPE_TARGET}={scope_level}", cfg.log_level());

    EnvFilter::try_new(&directives).with_context(|| format!("invalid log filter `{directives}`"))
}

/// Builds the filter from `RUST_LOG`, falling back to [`default_filter`].
///
/// Terminal output is always let through, whatever the filter says.
pub fn build_filter(cfg: &Config) -> anyhow::Result<EnvFilter> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => default_filter(cfg)?,
    };
    let print_directive = format!("{PRINT_TARGET}=info")
        .parse::<Directive>()
        .context("invalid print directive")?;

    Ok(filter.add_directive(print_directive))
}

pub fn init_logging(cfg: &Config) -> anyhow::Result<()> {
    let filter = build_filter(cfg)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(BandmatchFormatter)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
