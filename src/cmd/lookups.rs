use super::GlobalArgs;
use personagen::Category;
use std::path::PathBuf;

pub fn run(
    global: &GlobalArgs,
    output: Option<PathBuf>,
    keys: bool,
    category: Option<Category>,
) -> anyhow::Result<()> {
    let (_, context) = super::load(global, None, None, None)?;
    let lookups = context.lookups();

    if keys {
        let categories: Vec<Category> = match category {
            Some(c) => vec![c],
            None => Category::ALL.to_vec(),
        };
        let mut lines = Vec::new();
        for category in categories {
            for (position, key) in lookups.sort_keys(category).into_iter().enumerate() {
                lines.push(format!("{}\t{}\t{}", category, position, key));
            }
        }
        let text = lines.join("\n") + "\n";
        match output {
            Some(path) => std::fs::write(&path, text)?,
            None => print!("{}", text),
        }
        return Ok(());
    }

    match output {
        Some(path) => {
            lookups.save(&path)?;
            eprintln!("Dataset written to {}", path.display());
            for (category, count) in lookups.row_counts() {
                eprintln!("  {:<20} {:>6}", category, count);
            }
        }
        None => println!("{}", lookups.to_json_pretty()?),
    }
    Ok(())
}
