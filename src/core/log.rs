use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::visible_len;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

/// ANSI color per logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "piano" | "test" => Colour::Green,
        "incident" => Colour::Yellow,
        "del" | "reset" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);

        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);

        let rendered: Vec<String> = entries
            .iter()
            .map(|(_, _, op, target, _)| {
                let color = color_for_operation(op);
                let mut cell = color.paint(op.as_str()).to_string();
                if !target.is_empty() {
                    cell.push_str(&format!(" ({target})"));
                }
                cell
            })
            .collect();

        let op_w = rendered
            .iter()
            .map(|s| visible_len(s))
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for ((id, date, _, _, message), op_target) in entries.iter().zip(rendered) {
            let padding = " ".repeat(op_w.saturating_sub(visible_len(&op_target)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
