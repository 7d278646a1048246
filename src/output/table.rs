//
//  gitlink
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Utilities
//!
//! Tables for listing platforms and the domain registry. Uses `comfy_table`
//! with UTF-8 borders and content arranged to fit the terminal width.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::config::{DomainMapping, Platform};

/// Creates a new styled table with default settings.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header(names: &[&str], color: bool) -> Vec<Cell> {
    names
        .iter()
        .map(|name| {
            let cell = Cell::new(name);
            if color {
                cell.fg(Color::Cyan)
            } else {
                cell
            }
        })
        .collect()
}

/// Lists platforms with the domains that resolve to each.
///
/// Platforms no registry entry points at show `-` as their domains.
pub fn platforms_table(platforms: &[Platform], registry: &[DomainMapping], color: bool) -> Table {
    let mut table = create_table();
    table.set_header(header(&["Platform", "Domains", "URL template"], color));

    for platform in platforms {
        let domains: Vec<&str> = registry
            .iter()
            .filter(|m| m.platform == platform.name)
            .map(|m| m.domain.as_str())
            .collect();
        let domains = if domains.is_empty() {
            "-".to_string()
        } else {
            domains.join(", ")
        };
        table.add_row(vec![
            Cell::new(&platform.name),
            Cell::new(domains),
            Cell::new(&platform.url_template),
        ]);
    }

    table
}

/// Lists the domain registry in match order.
///
/// Entries naming an unknown platform are flagged in red.
pub fn registry_table(registry: &[DomainMapping], platforms: &[Platform], color: bool) -> Table {
    let mut table = create_table();
    table.set_header(header(&["#", "Domain", "Platform"], color));

    for (i, mapping) in registry.iter().enumerate() {
        let known = platforms.iter().any(|p| p.name == mapping.platform);
        let platform = if known {
            Cell::new(&mapping.platform)
        } else if color {
            Cell::new(format!("{} (missing)", mapping.platform)).fg(Color::Red)
        } else {
            Cell::new(format!("{} (missing)", mapping.platform))
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&mapping.domain),
            platform,
        ]);
    }

    table
}
