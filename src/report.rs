use std::io::Write;

use crate::collector::CoinScan;
use crate::error::Result;
use crate::types::DerivedAddress;
use crate::watchlist::Watchlist;

const HEADERS: [&str; 8] = ["(index)", "PubKey", "Address", "PrivateKey", "Index", "CoinType", "Change", "Zone"];

fn quoted(value: &str) -> String {
    format!("'{}'", value)
}

fn row(position: usize, address: &DerivedAddress) -> Vec<String> {
    vec![
        position.to_string(),
        quoted(&address.public_key),
        quoted(&address.address),
        quoted(&address.private_key),
        address.index.to_string(),
        address.coin_type.to_string(),
        quoted("No"),
        quoted(address.shard),
    ]
}

fn centered(cell: &str, width: usize) -> String {
    let padding = width - cell.chars().count();
    let left = padding / 2;
    format!("{}{}{}", " ".repeat(left), cell, " ".repeat(padding - left))
}

fn border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|width| "─".repeat(width + 2)).collect();
    format!("{}{}{}", left, segments.join(&middle.to_string()), right)
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells.iter().zip(widths).map(|(cell, width)| format!(" {} ", centered(cell, *width))).collect();
    format!("│{}│", padded.join("│"))
}

/// Box-drawn table with centered cells.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let headers: Vec<String> = headers.iter().map(|header| header.to_string()).collect();
    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let mut lines = vec![border(&widths, '┌', '┬', '┐'), line(&headers, &widths), border(&widths, '├', '┼', '┤')];
    lines.extend(rows.iter().map(|row| line(row, &widths)));
    lines.push(border(&widths, '└', '┴', '┘'));
    lines.join("\n")
}

pub fn print_address_table<W: Write>(out: &mut W, shard: &str, addresses: &[&DerivedAddress]) -> Result<()> {
    if addresses.is_empty() {
        writeln!(out, "No {} addresses found", shard)?;
        return Ok(());
    }
    writeln!(out, "\n{} addresses:", shard)?;
    let rows: Vec<Vec<String>> = addresses.iter().enumerate().map(|(position, address)| row(position, address)).collect();
    writeln!(out, "{}", render_table(&HEADERS, &rows))?;
    Ok(())
}

/// Collected addresses of one shard that are on the watch-list, in collection order.
pub fn matches<'a>(bucket: &'a [DerivedAddress], watchlist: &Watchlist) -> Vec<&'a DerivedAddress> {
    bucket.iter().filter(|address| watchlist.contains(&address.address)).collect()
}

/// Prints the watch-list matches of every shard of one coin type. Returns the number of matches.
pub fn report_coin<W: Write>(out: &mut W, scan: &CoinScan, watchlist: &Watchlist) -> Result<usize> {
    let mut found = 0;
    for (shard, bucket) in scan.collection.iter() {
        let hits = matches(bucket, watchlist);
        found += hits.len();
        print_address_table(out, shard, &hits)?;
    }
    Ok(found)
}
