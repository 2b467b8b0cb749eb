use std::io::{self, Write};

use crate::command::command_parser::CommandParser;
use crate::command::commands;
use crate::command::manual::ManualCatalog;
use crate::command::request::Request;
use crate::core::context::AppContext;
use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::STYLE_RESET;
use crate::ui::chrome::UiChrome;
use crate::ui::display_manager::DisplayManager;

/// The planner REPL: one command per line, rendered against the live session.
pub struct MainFlow<'a> {
    ctx: &'a mut AppContext,
    command_parser: CommandParser,
    display: DisplayManager,
    logger: Logger,
}

impl<'a> MainFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            command_parser: CommandParser::new(),
            display: DisplayManager::new(),
            logger,
        }
    }

    pub fn context(&self) -> &AppContext {
        &*self.ctx
    }
}

impl<'a> Flow for MainFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        self.print_prompt();
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        self.prepare_output_space();
        let line = input.trim();
        if let Some(ctrl) = self.handle_non_command(line) {
            return Ok(ctrl);
        }

        let request = match self.command_parser.parse_line(line) {
            Ok(request) => request,
            Err(err) => {
                self.handle_command_error(command_word(line), err);
                return Ok(FlowCtrl::Continue);
            }
        };

        self.logger
            .info(format!("Command run: {line}"), LogTarget::FileOnly);
        self.execute_request(command_word(line), request);
        Ok(FlowCtrl::Continue)
    }
}

fn command_word(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

impl<'a> MainFlow<'a> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        UiChrome::new().print_banner();
        println!();
        println!("Use 'man <topic>' for command-specific details.");
        println!("Available topics: {}", ManualCatalog::new().topics().join(", "));
        println!();
        println!("Config path: {}", self.ctx.config_path.display());
        println!("Saves path: {}", self.ctx.saves_dir.display());
        println!("Logs path: {}", self.ctx.logs_dir.display());
        println!();
        println!("Planning {}. Switch with 'day <day>'.", self.ctx.selected_day.full_name());
        self.ctx.startup_displayed = true;
    }

    fn print_prompt(&self) {
        UiChrome::new().print_prompt(&format!("{}> ", self.ctx.selected_day));
    }

    fn prepare_output_space(&self) {
        UiChrome::new().print_prompt_bottom_padding();
        println!();
        print!("{STYLE_RESET}");
        let _ = io::stdout().flush();
    }

    fn handle_non_command(&self, line: &str) -> Option<FlowCtrl> {
        if line.is_empty() {
            return Some(FlowCtrl::Continue);
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            return Some(FlowCtrl::Finish);
        }
        None
    }

    fn execute_request(&mut self, raw_command: &str, request: Request) {
        match commands::execute(self.ctx, request) {
            Ok(response) => {
                self.display
                    .print_response(&response, &self.ctx.session, &self.ctx.config);
                println!();
            }
            Err(err) => self.handle_command_error(raw_command, err),
        }
    }

    fn handle_command_error(&self, raw_command: &str, err: Error) {
        let err_text = err.to_string();
        match err_text.split_once("\nUsage:") {
            Some((head, tail)) => {
                self.logger.error(
                    format!("Command execution failed for '{raw_command}'. {head}\nUsage:{tail}"),
                    LogTarget::ConsoleOnly,
                );
                self.logger.error(
                    format!("Command execution failed for '{raw_command}'. {}", head.trim()),
                    LogTarget::FileOnly,
                );
            }
            None => self.logger.error(
                format!("Command execution failed for '{raw_command}'. {err_text}"),
                LogTarget::ConsoleAndFile,
            ),
        }
    }
}
