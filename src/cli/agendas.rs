//! agenda agendas command implementation

use std::path::PathBuf;

use super::Context;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput};
use crate::store::list_agendas;

#[derive(serde::Serialize)]
struct AgendasReport {
    dir: PathBuf,
    agendas: Vec<String>,
}

pub fn run(ctx: &Context) -> Result<()> {
    let agendas = list_agendas(ctx.dir())?;

    let mut human = HumanOutput::new(format!("agenda agendas: {} found", agendas.len()));
    human.push_summary("dir", ctx.dir().display().to_string());
    for name in &agendas {
        human.push_detail(name.clone());
    }
    if agendas.is_empty() {
        human.push_next_step("agenda shell");
    }

    let report = AgendasReport {
        dir: ctx.dir().to_path_buf(),
        agendas,
    };
    emit_success(ctx.output, "agendas", &report, Some(&human))
}
