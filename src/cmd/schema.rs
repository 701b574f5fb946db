use personagen::json_schema;
use std::fs;
use std::path::PathBuf;

pub fn run(name: Option<String>, output: Option<PathBuf>, list: bool) -> anyhow::Result<()> {
    if list {
        for name in json_schema::schema_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let schemas: Vec<(String, schemars::Schema)> = match name {
        Some(name) => {
            let schema = json_schema::get_schema(&name).ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown schema: {} (available: {})",
                    name,
                    json_schema::schema_names().join(", ")
                )
            })?;
            vec![(name, schema)]
        }
        None => json_schema::all_schemas()
            .into_iter()
            .map(|(name, schema)| (name.to_string(), schema))
            .collect(),
    };

    match output {
        Some(dir) => {
            fs::create_dir_all(&dir)?;
            for (name, schema) in &schemas {
                let path = dir.join(format!("{}.schema.json", name));
                fs::write(&path, serde_json::to_string_pretty(schema)? + "\n")?;
                eprintln!("Wrote {}", path.display());
            }
        }
        None => {
            for (_, schema) in &schemas {
                println!("{}", serde_json::to_string_pretty(schema)?);
            }
        }
    }
    Ok(())
}
