//! Command-line interface utilities
//!
//! This module provides the console side of the game:
//! - Stdin slot source for interactive players
//! - Board rendering and announcements (see [`interface`])
//! - Startup prompts: opponent selection and player login

#![cfg(feature = "std")]

pub mod interface;

// Re-export interface functions
pub use interface::*;

use std::io::{self, BufRead, ErrorKind, Write};

use anyhow::{anyhow, Context};

use crate::engine::common::{InputError, InvalidSlot};
use crate::identity::{AuthError, DisplayName, IdentityStore};
use crate::player::{Player, SlotSource};

/// Kind of the second player, chosen at startup.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opponent {
    Human,
    Ai,
}

/// Parse one line of user input as a raw slot value.
pub fn parse_slot(line: &str) -> Result<i64, InputError> {
    line.trim().parse().map_err(|_| InputError::Unreadable)
}

/// [`SlotSource`] reading one slot per line from stdin.
///
/// Stdin is locked only for the duration of each read, so several sources
/// can share the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

impl SlotSource for StdinSource {
    fn request_slot(&mut self) -> Result<i64, InputError> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => Err(InputError::Closed),
            Ok(_) => parse_slot(&line),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(InputError::Unreadable),
            Err(_) => Err(InputError::Closed),
        }
    }

    fn reject(&mut self, reason: &InvalidSlot) {
        log::debug!("{}", reason);
        std::print!("Invalid slot! Try again: ");
        let _ = io::stdout().flush();
    }
}

fn read_token<R: BufRead>(input: &mut R) -> anyhow::Result<String> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("failed to read input")?;
    if n == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(line.trim().to_string())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> anyhow::Result<String> {
    write!(out, "{}", text)?;
    out.flush()?;
    read_token(input)
}

/// Ask which kind of player takes the second seat. Anything but `A`/`a`
/// selects a human.
pub fn prompt_opponent<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> anyhow::Result<Opponent> {
    let choice = prompt(input, out, "Choose player 2 (H for human, A for AI): ")?;
    if choice.eq_ignore_ascii_case("a") {
        Ok(Opponent::Ai)
    } else {
        Ok(Opponent::Human)
    }
}

fn register_user<R: BufRead, W: Write>(
    store: &mut IdentityStore,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    writeln!(out, "Register")?;
    let mut username = prompt(input, out, "Enter a username: ")?;
    loop {
        if username.is_empty() {
            username = prompt(input, out, "Username cannot be empty! Enter a username: ")?;
        } else if store.contains(&username) {
            username = prompt(
                input,
                out,
                "Username already exists! Please choose a different username: ",
            )?;
        } else {
            break;
        }
    }
    let password = prompt(input, out, "Enter a password: ")?;
    store.register(&username, &password)?;
    writeln!(out, "Registration successful!")?;
    Ok(())
}

/// Run the console login flow for player `index` (0-based), optionally
/// registering first. Repeats the login until it succeeds.
pub fn login_player<R: BufRead, W: Write>(
    store: &mut IdentityStore,
    index: usize,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<DisplayName> {
    writeln!(out, "Player {} login.", index + 1)?;
    let choice = prompt(input, out, "Do you want to (R)egister or (L)ogin? ")?;
    if choice.eq_ignore_ascii_case("r") {
        register_user(store, input, out)?;
    }
    loop {
        writeln!(out, "Login")?;
        let username = prompt(input, out, "Enter username: ")?;
        let password = prompt(input, out, "Enter password: ")?;
        match store.authenticate(&username, &password) {
            Ok(name) => {
                writeln!(out, "Login successful!")?;
                return Ok(name);
            }
            Err(AuthError::InvalidCredentials) => {
                writeln!(out, "Invalid username or password. Please try again.")?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Give every human player a display name through the login flow.
/// Automated players keep their fixed name.
pub fn resolve_identities<R: BufRead, W: Write>(
    players: &mut [Player],
    store: &mut IdentityStore,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    for (i, player) in players.iter_mut().enumerate() {
        if player.is_automated() {
            continue;
        }
        let name = login_player(store, i, input, out)?;
        player.set_name(name);
    }
    Ok(())
}
