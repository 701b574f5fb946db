use super::GlobalArgs;
use personagen::GenerationRequest;

pub fn run(
    global: &GlobalArgs,
    locale: Option<String>,
    seed: Option<i64>,
    batch: i64,
    index: i64,
    compact: bool,
) -> anyhow::Result<()> {
    let (config, context) = super::load(global, locale, seed, None)?;

    let request = GenerationRequest::new(config.locale, config.seed, batch, index);
    let record = context.generate(&request)?;

    let json = if compact {
        serde_json::to_string(&record)?
    } else {
        serde_json::to_string_pretty(&record)?
    };
    println!("{}", json);
    Ok(())
}
