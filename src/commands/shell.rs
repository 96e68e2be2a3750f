//! Shell command - interactive dashboard.
//!
//! Reads one command per line and runs it to completion before reading the
//! next. The session (user, current view, lead edits, settings) lives for the
//! whole shell and is dropped on exit.

use std::io::Write;

use anyhow::{anyhow, bail, Result};
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::GlobalArgs;
use crate::access::{View, ADMIN_REQUIRED};
use crate::config::Config;
use crate::render;
use crate::session::{Session, SessionError, Setting, StatusEdit};
use crate::types::{LeadStatus, Role, StatusFilter, Tenant};
use crate::views::Screen;

const HELP: &str = "\
Commands:
  login <org> <role>     sign in (org: org-a, org-b; role: admin, agent)
  logout                 sign out
  switch <org>           switch organization
  go <view>              overview, leads, call-logs, settings
  filter <status>        lead status filter: all, new, contacted, converted
  set <lead-id> <status> change a lead's status (admin)
  toggle <setting>       email-notifications, auto-assign-leads, call-recording (admin)
  show                   show the current view
  whoami                 show the signed-in user
  help                   this message
  quit                   leave the shell";

#[derive(Args)]
pub struct ShellCmd;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Login { tenant: Tenant, role: Role },
    Logout,
    Switch(Tenant),
    Go(View),
    Filter(StatusFilter),
    Set { lead_id: String, status: LeadStatus },
    Toggle(Setting),
    Show,
    WhoAmI,
    Help,
    Quit,
}

#[derive(Debug)]
enum Step {
    Message(String),
    Screen { note: Option<String>, screen: Screen },
    Quit,
}

fn parse(line: &str) -> Result<ShellCommand> {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = words.collect();

    let cmd = match (verb.as_str(), args.as_slice()) {
        ("login", [tenant @ .., role]) if !tenant.is_empty() => ShellCommand::Login {
            tenant: tenant.join(" ").parse()?,
            role: role.parse()?,
        },
        ("login", _) => bail!("usage: login <org> <role>"),
        ("logout", []) => ShellCommand::Logout,
        ("switch", tenant) if !tenant.is_empty() => ShellCommand::Switch(tenant.join(" ").parse()?),
        ("switch", _) => bail!("usage: switch <org>"),
        ("go", [view]) => ShellCommand::Go(View::from_name(view)),
        ("go", _) => bail!("usage: go <view>"),
        ("filter", [status]) => ShellCommand::Filter(status.parse()?),
        ("filter", _) => bail!("usage: filter <status>"),
        ("set", [lead_id, status]) => ShellCommand::Set {
            lead_id: lead_id.to_string(),
            status: status.parse()?,
        },
        ("set", _) => bail!("usage: set <lead-id> <status>"),
        ("toggle", setting) if !setting.is_empty() => {
            ShellCommand::Toggle(setting.join(" ").parse()?)
        }
        ("toggle", _) => bail!("usage: toggle <setting>"),
        ("show", []) => ShellCommand::Show,
        ("whoami", []) => ShellCommand::WhoAmI,
        ("help" | "?", _) => ShellCommand::Help,
        ("quit" | "exit", []) => ShellCommand::Quit,
        _ => return Err(anyhow!("unknown command: {} (try `help`)", line.trim())),
    };
    Ok(cmd)
}

fn apply(session: &mut Session, cmd: ShellCommand) -> Result<Step, SessionError> {
    let step = match cmd {
        ShellCommand::Login { tenant, role } => {
            session.login(tenant, role);
            current(session, None)?
        }
        ShellCommand::Logout => {
            session.logout();
            Step::Message("Signed out.".to_string())
        }
        ShellCommand::Switch(tenant) => {
            session.switch_tenant(tenant)?;
            current(session, Some(format!("Switched to {}.", tenant)))?
        }
        ShellCommand::Go(view) => {
            session.navigate(view);
            let note = (session.current_view() != view)
                .then(|| format!("{}: {}.", view, ADMIN_REQUIRED));
            current(session, note)?
        }
        ShellCommand::Filter(filter) => {
            session.set_filter(filter);
            session.navigate(View::Leads);
            current(session, None)?
        }
        ShellCommand::Set { lead_id, status } => {
            let note = match session.change_lead_status(&lead_id, status)? {
                StatusEdit::Applied => format!("Lead {} set to {}.", lead_id, status),
                StatusEdit::ReadOnly => {
                    format!("View-only access: {} to edit lead statuses.", ADMIN_REQUIRED)
                }
                StatusEdit::UnknownLead => {
                    format!("No lead with id '{}' in this organization.", lead_id)
                }
            };
            session.navigate(View::Leads);
            current(session, Some(note))?
        }
        ShellCommand::Toggle(setting) => {
            let on = session.toggle_setting(setting)?;
            session.navigate(View::Settings);
            current(
                session,
                Some(format!("{} is now {}.", setting, if on { "on" } else { "off" })),
            )?
        }
        ShellCommand::Show => current(session, None)?,
        ShellCommand::WhoAmI => match session.user() {
            Some(user) => Step::Message(render::header(user)),
            None => Step::Message("Not signed in.".to_string()),
        },
        ShellCommand::Help => Step::Message(HELP.to_string()),
        ShellCommand::Quit => Step::Quit,
    };
    Ok(step)
}

fn current(session: &Session, note: Option<String>) -> Result<Step, SessionError> {
    Ok(Step::Screen {
        note,
        screen: session.screen()?,
    })
}

fn prompt(session: &Session) -> Result<()> {
    let mut stdout = std::io::stdout();
    match session.user() {
        Some(user) => write!(stdout, "{} ({})> ", user.tenant, user.role)?,
        None => write!(stdout, "sdash> ")?,
    }
    stdout.flush()?;
    Ok(())
}

impl ShellCmd {
    pub async fn run(&self, globals: &GlobalArgs) -> Result<()> {
        let config = Config::load()?;
        let mut session = globals.open_signed_out(&config).await?;

        if globals.tenant.is_some() || globals.role.is_some() {
            session.login(
                globals.tenant.unwrap_or(config.default_tenant),
                globals.role.unwrap_or(config.default_role),
            );
        } else {
            println!("Sales Dashboard - sign in with `login <org> <role>`, `help` for commands.");
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            prompt(&session)?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let cmd = match parse(&line) {
                Ok(cmd) => cmd,
                Err(e) => {
                    eprintln!("{}", e);
                    continue;
                }
            };

            match apply(&mut session, cmd) {
                Ok(Step::Quit) => break,
                Ok(Step::Message(message)) => println!("{}", message),
                Ok(Step::Screen { note, screen }) => {
                    if let Some(note) = note {
                        println!("{}", note);
                    }
                    globals.emit(&screen)?;
                }
                Err(e) => eprintln!("{}", e),
            }
        }

        Ok(())
    }
}
