//! List the ordered blog posts

use anyhow::Result;

use crate::listing::PostRow;
use crate::Blog;

/// Print the listing in display order
pub fn run(blog: &Blog) -> Result<()> {
    let index = blog.build_index()?;

    if index.is_empty() {
        println!("{}", blog.config.empty_message);
        return Ok(());
    }

    println!("Posts ({}):", index.len());
    for row in &index.rows {
        println!("{}", format_row(row));
    }

    Ok(())
}

/// One line per post: pin marker, date, title, link and shown tags
pub fn format_row(row: &PostRow) -> String {
    let marker = if row.pinned { "*" } else { " " };
    let tags = if row.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", row.tags.join(", "))
    };
    format!(
        "{} {} - {} ({}){}",
        marker, row.date, row.title, row.href, tags
    )
}
