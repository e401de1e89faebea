//! agenda shell command implementation
//!
//! Runs the interactive menu on stdin/stdout.

use std::io;

use super::Context;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::session::{select_agenda, Session};

pub fn run(ctx: &Context, create: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter =
        Prompter::new(stdin.lock(), io::stdout()).with_pause(ctx.config.prompt.pause);

    let store = if ctx.agenda.is_some() {
        let store = ctx.agenda_store()?;
        if !store.exists() {
            if !create {
                return Err(Error::AgendaNotFound(store.path().to_path_buf()));
            }
            store.create()?;
        }
        store
    } else {
        match select_agenda(&mut prompter, ctx.dir())? {
            Some(store) => store,
            None => return Ok(()),
        }
    };

    tracing::info!(agenda = store.name(), path = %store.path().display(), "opening agenda");
    Session::new(prompter, store, &ctx.config).run()
}
