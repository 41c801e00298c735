use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::decode;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROSTERS
    //
    let mut stmt = pool
        .conn
        .prepare("SELECT period_key, data FROM rosters ORDER BY period_key ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut keys = Vec::new();
    let mut people = 0usize;
    let mut unreadable = 0usize;
    for r in rows {
        let (key, raw) = r?;
        match decode(&key, &raw) {
            Ok(roster) => people += roster.len(),
            Err(_) => unreadable += 1,
        }
        keys.push(key);
    }

    println!(
        "{}• Stored rosters:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        keys.len(),
        RESET
    );
    println!("{}• Total entries:{} {}", CYAN, RESET, people);

    if unreadable > 0 {
        println!(
            "{}• Unreadable rosters:{} {}{}{}",
            CYAN, RESET, RED, unreadable, RESET
        );
    }

    //
    // 3) PERIOD RANGE
    //
    match (keys.first(), keys.last()) {
        (Some(first), Some(last)) => {
            println!("{}• Periods:{} {} → {}", CYAN, RESET, first, last);
        }
        _ => println!("{}• Periods:{} {}none{}", CYAN, RESET, GREY, RESET),
    }

    println!();
    Ok(())
}
