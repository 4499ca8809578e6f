//! Interactive terminal demo driving a clockpick time input.
//!
//! Every line of input maps to one widget event, and the resulting render
//! snapshot is printed the way a presentation layer would consume it. Run
//! with `RUST_LOG=clockpick_widget=trace` to watch the state transitions.
use std::io::{self, BufRead, Write};

use clockpick_widget::{
    Meridiem, TimeField, TimeInputArgs, TimeInputController, TimeInputSnapshot,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut input = TimeInputController::new(
        TimeInputArgs::default()
            .use_12_hour(true)
            .minute_step(5)
            .placeholder("--:-- --")
            .on_commit(|text| println!("  committed -> {text}")),
    )?;
    info!("clockpick demo ready");
    print_help();
    render(&input.snapshot());

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        let (command, rest) = match trimmed.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };
        match command {
            "" => continue,
            "help" => {
                print_help();
                continue;
            }
            "quit" | "exit" => break,
            "open" => input.activate(),
            "toggle" => input.toggle_open(),
            "outside" => input.outside_interaction(),
            "blur" => input.blur(),
            "flip" => {
                report(input.toggle_meridiem());
            }
            "am" => {
                report(input.select_meridiem(Meridiem::Am));
            }
            "pm" => {
                report(input.select_meridiem(Meridiem::Pm));
            }
            "hour" | "minute" | "second" => select(&mut input, command, rest),
            "focus" => match parse_field(rest) {
                Some(field) => input.focus_field(field),
                None => println!("  usage: focus hour|minute|second"),
            },
            "text" => {
                report(input.edit_text(rest));
            }
            "set" => {
                input.set_value(rest);
            }
            "disable" => input.set_disabled(true),
            "enable" => input.set_disabled(false),
            "options" => {
                for option in input.day_options() {
                    println!("  {option}");
                }
                continue;
            }
            _ => {
                println!("  unknown command {command:?}, try `help`");
                continue;
            }
        }
        render(&input.snapshot());
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,clockpick_widget=debug"))
        .unwrap();
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn select(input: &mut TimeInputController, field: &str, rest: &str) {
    let Some(field) = parse_field(field) else {
        return;
    };
    match rest.parse::<u8>() {
        Ok(value) => report(input.select_option(field, value)),
        Err(_) => println!("  expected a number, got {rest:?}"),
    }
}

fn parse_field(name: &str) -> Option<TimeField> {
    match name {
        "hour" => Some(TimeField::Hours),
        "minute" => Some(TimeField::Minutes),
        "second" => Some(TimeField::Seconds),
        _ => None,
    }
}

fn report(committed: bool) {
    if !committed {
        println!("  (no commit)");
    }
}

fn render(snapshot: &TimeInputSnapshot) {
    let state = if snapshot.disabled {
        "disabled"
    } else if snapshot.is_open {
        "open"
    } else {
        "closed"
    };
    println!("[{state}] {}", snapshot.effective_display());
    if !snapshot.is_open {
        return;
    }
    println!(
        "  hours:   {}",
        format_options(&snapshot.hour_options, snapshot.selected_hour)
    );
    println!(
        "  minutes: {}",
        format_options(&snapshot.minute_options, snapshot.selected_minute)
    );
    if !snapshot.second_options.is_empty() {
        println!(
            "  seconds: {}",
            format_options(&snapshot.second_options, snapshot.selected_second)
        );
    }
    if snapshot.shows_meridiem {
        let marker = |meridiem| {
            if snapshot.meridiem == Some(meridiem) {
                format!("[{}]", meridiem.as_str())
            } else {
                format!(" {} ", meridiem.as_str())
            }
        };
        println!("  meridiem: {}{}", marker(Meridiem::Am), marker(Meridiem::Pm));
    }
    if let Some(field) = snapshot.active_field {
        println!("  focused: {field}");
    }
}

fn format_options(options: &[u8], selected: Option<u8>) -> String {
    options
        .iter()
        .map(|&option| {
            if Some(option) == selected {
                format!("[{option:02}]")
            } else {
                format!(" {option:02} ")
            }
        })
        .collect()
}

fn print_help() {
    println!("commands:");
    println!("  open | toggle | outside   dropdown control");
    println!("  hour N | minute N | second N   select an option");
    println!("  am | pm | flip            meridiem");
    println!("  text S | blur             type into the field");
    println!("  set S                     push a value from the owner");
    println!("  focus F | disable | enable | options | help | quit");
}
