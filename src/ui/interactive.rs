use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::clipboard::SystemClipboard;
use crate::error::{Result, SineError};
use crate::plot::{PlotConfig, render_plot};
use crate::session::Session;
use crate::table::{FIELD_NAMES, TableParams};
use crate::ui::params_table;
use crate::utils::consts::{VALUES_PER_LINE_MAX, VALUES_PER_LINE_MIN};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    EditParams,
    Calculate,
    Copy,
    ValuesPerLine,
    Quit,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::EditParams,
        Action::Calculate,
        Action::Copy,
        Action::ValuesPerLine,
        Action::Quit,
    ];

    fn label(self, session: &Session) -> String {
        match self {
            Action::EditParams => "Edit parameters".to_string(),
            Action::Calculate => "Calculate".to_string(),
            Action::Copy => "Copy to clipboard".to_string(),
            Action::ValuesPerLine => {
                format!("Values per line ({})", session.values_per_line())
            }
            Action::Quit => "Quit".to_string(),
        }
    }
}

/// Menu loop over a session until the user quits.
pub fn run(session: &mut Session, plot: &PlotConfig) -> Result<()> {
    let theme = ColorfulTheme::default();
    // Opened on first copy, then kept so the text stays pasteable.
    let mut clipboard: Option<SystemClipboard> = None;

    println!("{}", params_table(session.params()));

    loop {
        let labels: Vec<String> = Action::ALL
            .iter()
            .map(|action| action.label(session))
            .collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&labels)
            .default(1)
            .interact()?;

        match Action::ALL[choice] {
            Action::EditParams => {
                match prompt_params(&theme, session.params()) {
                    Ok(params) => {
                        session.set_params(params)?;
                        println!("{}", params_table(session.params()));
                    }
                    Err(e) => keep_params_on(e)?,
                }
            }
            Action::Calculate => {
                if let Err(e) = session.calculate() {
                    tracing::error!("Calculation failed: {}", e);
                    continue;
                }
                println!("{}", session.text());
                if let Some(table) = session.table().filter(|_| plot.enabled) {
                    render_plot(&table.values, plot);
                }
            }
            Action::Copy => {
                if clipboard.is_none() {
                    match SystemClipboard::new() {
                        Ok(handle) => clipboard = Some(handle),
                        Err(e) => {
                            tracing::error!("{}", e);
                            continue;
                        }
                    }
                }
                if let Some(sink) = clipboard.as_mut() {
                    if let Err(e) = session.copy(sink) {
                        tracing::error!("{}", e);
                    }
                }
            }
            Action::ValuesPerLine => {
                let value: usize = Input::with_theme(&theme)
                    .with_prompt(format!(
                        "Values per line ({VALUES_PER_LINE_MIN}-{VALUES_PER_LINE_MAX})"
                    ))
                    .default(session.values_per_line())
                    .validate_with(|v: &usize| -> std::result::Result<(), String> {
                        if (VALUES_PER_LINE_MIN..=VALUES_PER_LINE_MAX).contains(v) {
                            Ok(())
                        } else {
                            Err(format!(
                                "pick a value between {VALUES_PER_LINE_MIN} and {VALUES_PER_LINE_MAX}"
                            ))
                        }
                    })
                    .interact_text()?;
                let label = session.set_values_per_line(value);
                println!("Values per line: {label}");
            }
            Action::Quit => break,
        }
    }

    tracing::info!("Exiting gracefully...");
    Ok(())
}

/// Log a rejected row and carry on; prompt failures end the session.
fn keep_params_on(err: SineError) -> Result<()> {
    match err {
        SineError::Prompt(_) => Err(err),
        other => {
            tracing::error!("Parameters not changed: {}", other);
            Ok(())
        }
    }
}

/// Ask for every cell of the parameter row, prefilled with the current row.
fn prompt_params(theme: &ColorfulTheme, current: &TableParams) -> Result<TableParams> {
    let cells = current.fields();
    let mut edited: Vec<String> = Vec::with_capacity(FIELD_NAMES.len());

    for (name, cell) in FIELD_NAMES.iter().zip(cells) {
        let text: String = Input::with_theme(theme)
            .with_prompt(*name)
            .default(cell)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                match input.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() => Ok(()),
                    _ => Err("enter a number".to_string()),
                }
            })
            .interact_text()?;
        edited.push(text);
    }

    TableParams::from_fields([
        edited[0].as_str(),
        edited[1].as_str(),
        edited[2].as_str(),
        edited[3].as_str(),
        edited[4].as_str(),
    ])
}
