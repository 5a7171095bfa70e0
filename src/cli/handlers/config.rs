use crate::cli::args::ConfigAction;
use hexd::AlphabetRegistry;

pub fn handle(
    action: ConfigAction,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { json } => handle_list(json, registry),
        ConfigAction::Show { alphabet } => handle_show(&alphabet, registry),
    }
}

fn handle_list(json: bool, registry: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let names = registry.names();

    if json {
        let alphabets: Vec<serde_json::Value> = names
            .iter()
            .filter_map(|name| {
                registry.get_alphabet(name).map(|config| {
                    serde_json::json!({
                        "name": name,
                        "chars": config.chars,
                        "description": config.description,
                    })
                })
            })
            .collect();

        let output = serde_json::json!({
            "default_alphabet": registry.settings.default_alphabet(),
            "mixed_case": registry.settings.mixed_case(),
            "alphabets": alphabets,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let default = registry.settings.default_alphabet();
    for name in names {
        let Some(config) = registry.get_alphabet(name) else {
            continue;
        };
        let marker = if name == default { "*" } else { " " };
        println!("{} {:<15} {}", marker, name, config.chars);
    }

    Ok(())
}

fn handle_show(name: &str, registry: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    // Building the codec validates the alphabet and suggests close names on a typo
    let codec = registry.codec(name)?;
    let config = registry
        .get_alphabet(name)
        .ok_or_else(|| format!("Alphabet '{}' not found", name))?;

    println!("Alphabet: {}", name);
    println!("  Symbols: {}", codec.alphabet());
    if let Some(description) = &config.description {
        println!("  Description: {}", description);
    }
    println!(
        "  Default: {}",
        if name == registry.settings.default_alphabet() {
            "yes"
        } else {
            "no"
        }
    );
    println!(
        "  Decode case: {}",
        if registry.settings.mixed_case() {
            "mixed"
        } else {
            "strict"
        }
    );

    Ok(())
}
