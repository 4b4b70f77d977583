//! End-to-end tool tests against a mock PokéAPI.
//!
//! Run with:
//!   cargo test -p pokemon-tools --test tools_tests

use std::time::Duration;

use pokeapi::{ApiConfig, PokeApiClient};
use pokemon_tools::{default_registry, Locale, ToolRegistry};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOOL_NAMES: [&str; 6] = [
    "get_pokemon",
    "get_pokemon_list",
    "get_ability",
    "get_type",
    "get_species",
    "get_evolution_chain",
];

fn registry_for(server: &MockServer, locale: Locale) -> ToolRegistry {
    let config = ApiConfig::new(format!("{}/api/v2/", server.uri()))
        .with_timeout(Duration::from_secs(5));
    default_registry(PokeApiClient::new(config).unwrap(), locale)
}

async fn mount_json(server: &MockServer, at: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn call(registry: &ToolRegistry, tool: &str, args: Value) -> String {
    let output = registry
        .execute_json(tool, &args.to_string())
        .await
        .unwrap();
    assert!(output.success);
    output.content
}

// ============================================================================
// Registry
// ============================================================================

#[tokio::test]
async fn test_default_registry_lists_all_tools_in_order() {
    let server = MockServer::start().await;
    let registry = registry_for(&server, Locale::English);

    assert_eq!(registry.list_tools(), TOOL_NAMES.to_vec());
    for def in registry.definitions() {
        assert_eq!(def.input_schema["type"], "object");
        assert!(!def.description.is_empty());
    }
}

// ============================================================================
// get_pokemon
// ============================================================================

#[tokio::test]
async fn test_get_pokemon_renders_fields() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v2/pokemon/pikachu",
        json!({
            "name": "pikachu",
            "types": [{"type": {"name": "electric"}}],
            "abilities": [{"ability": {"name": "static"}}],
            "weight": 60
        }),
    )
    .await;

    let registry = registry_for(&server, Locale::English);
    let text = call(&registry, "get_pokemon", json!({"name": "PIKACHU"})).await;

    assert_eq!(
        text,
        "Name: Pikachu\nTypes: Electric\nAbilities: Static\nWeight: 6.0 kg"
    );
}

#[tokio::test]
async fn test_get_pokemon_not_found_keeps_original_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let registry = registry_for(&server, Locale::English);
    let text = call(&registry, "get_pokemon", json!({"name": "MissingNo"})).await;
    assert_eq!(text, "No information found for Pokémon: MissingNo");
}

#[tokio::test]
async fn test_get_pokemon_missing_field_is_not_found() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/v2/pokemon/pikachu", json!({"name": "pikachu"})).await;

    let registry = registry_for(&server, Locale::Spanish);
    let text = call(&registry, "get_pokemon", json!({"name": "Pikachu"})).await;
    assert_eq!(text, "No se encontró información para el Pokémon: Pikachu");
}

// ============================================================================
// get_pokemon_list
// ============================================================================

#[tokio::test]
async fn test_get_pokemon_list_returns_limit_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("limit", "3"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1302,
            "results": [{"name": "bulbasaur"}, {"name": "ivysaur"}, {"name": "venusaur"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server, Locale::English);
    let text = call(&registry, "get_pokemon_list", json!({"limit": 3})).await;

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["Bulbasaur", "Ivysaur", "Venusaur"]);
}

#[tokio::test]
async fn test_get_pokemon_list_defaults_to_ten() {
    let server = MockServer::start().await;
    let results: Vec<Value> = (1..=10).map(|i| json!({"name": format!("mon-{i}")})).collect();
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": results})))
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server, Locale::English);
    let text = call(&registry, "get_pokemon_list", json!({})).await;
    assert_eq!(text.lines().count(), 10);
    assert_eq!(text.lines().next(), Some("Mon-1"));
}

#[tokio::test]
async fn test_get_pokemon_list_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let registry = registry_for(&server, Locale::English);
    let text = call(&registry, "get_pokemon_list", json!({"limit": 5})).await;
    assert_eq!(text, "Could not fetch the Pokémon list.");
}

// ============================================================================
// get_ability
// ============================================================================

#[tokio::test]
async fn test_get_ability_english_effect() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v2/ability/static",
        json!({
            "name": "static",
            "effect_entries": [
                {"effect": "Kann bei Berührung paralysieren.", "language": {"name": "de"}},
                {"effect": "Has a 30% chance of paralyzing attackers.", "language": {"name": "en"}}
            ]
        }),
    )
    .await;

    let registry = registry_for(&server, Locale::English);
    let text = call(&registry, "get_ability", json!({"name": "Static"})).await;
    assert_eq!(
        text,
        "Ability: Static\nEffect: Has a 30% chance of paralyzing attackers."
    );
}

#[tokio::test]
async fn test_get_ability_without_english_entry() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v2/ability/static",
        json!({
            "name": "static",
            "effect_entries": [{"effect": "Peut paralyser.", "language": {"name": "fr"}}]
        }),
    )
    .await;

    let registry = registry_for(&server, Locale::English);
    let text = call(&registry, "get_ability", json!({"name": "static"})).await;
    assert!(text.ends_with("Effect: No English description available."));
}

// ============================================================================
// get_type
// ============================================================================

#[tokio::test]
async fn test_get_type_by_numeric_id() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v2/type/10",
        json!({
            "name": "fire",
            "damage_relations": {
                "double_damage_from": [{"name": "ground"}, {"name": "rock"}, {"name": "water"}],
                "double_damage_to": [],
                "half_damage_from": [],
                "half_damage_to": [{"name": "rock"}]
            }
        }),
    )
    .await;

    let registry = registry_for(&server, Locale::English);
    let text = call(&registry, "get_type", json!({"type_id_or_name": 10})).await;
    assert_eq!(
        text,
        "Type: Fire\n\
         Double damage from: ground, rock, water\n\
         Double damage to: None\n\
         Half damage from: None\n\
         Half damage to: rock"
    );
}

// ============================================================================
// get_species
// ============================================================================

#[tokio::test]
async fn test_get_species() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v2/pokemon-species/mew",
        json!({
            "name": "mew",
            "habitat": {"name": "rare"},
            "color": {"name": "pink"},
            "shape": {"name": "upright"},
            "is_legendary": false,
            "is_mythical": true
        }),
    )
    .await;

    let registry = registry_for(&server, Locale::Spanish);
    let text = call(&registry, "get_species", json!({"name": "Mew"})).await;
    assert_eq!(
        text,
        "Especie de Mew:\nColor: pink\nForma: upright\nHábitat: rare\nLegendario: No\nMítico: Sí"
    );
}

// ============================================================================
// get_evolution_chain
// ============================================================================

#[tokio::test]
async fn test_get_evolution_chain_linear() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v2/pokemon-species/squirtle",
        json!({
            "name": "squirtle",
            "evolution_chain": {"url": format!("{}/api/v2/evolution-chain/3/", server.uri())}
        }),
    )
    .await;
    mount_json(
        &server,
        "/api/v2/evolution-chain/3/",
        json!({
            "chain": {
                "species": {"name": "squirtle"},
                "evolves_to": [{
                    "species": {"name": "wartortle"},
                    "evolves_to": [{"species": {"name": "blastoise"}, "evolves_to": []}]
                }]
            }
        }),
    )
    .await;

    let registry = registry_for(&server, Locale::English);
    let text = call(&registry, "get_evolution_chain", json!({"name": "Squirtle"})).await;
    assert_eq!(text, "Squirtle → Wartortle → Blastoise");
}

#[tokio::test]
async fn test_get_evolution_chain_branching_follows_first() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v2/pokemon-species/eevee",
        json!({
            "name": "eevee",
            "evolution_chain": {"url": format!("{}/api/v2/evolution-chain/67/", server.uri())}
        }),
    )
    .await;
    mount_json(
        &server,
        "/api/v2/evolution-chain/67/",
        json!({
            "chain": {
                "species": {"name": "eevee"},
                "evolves_to": [
                    {"species": {"name": "vaporeon"}, "evolves_to": []},
                    {"species": {"name": "jolteon"}, "evolves_to": []},
                    {"species": {"name": "flareon"}, "evolves_to": []}
                ]
            }
        }),
    )
    .await;

    let registry = registry_for(&server, Locale::English);
    let text = call(&registry, "get_evolution_chain", json!({"name": "eevee"})).await;
    assert_eq!(text, "Eevee → Vaporeon");
}

#[tokio::test]
async fn test_get_evolution_chain_second_fetch_fails() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v2/pokemon-species/ditto",
        json!({
            "name": "ditto",
            "evolution_chain": {"url": format!("{}/api/v2/evolution-chain/66/", server.uri())}
        }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/evolution-chain/66/"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let registry = registry_for(&server, Locale::English);
    let text = call(&registry, "get_evolution_chain", json!({"name": "ditto"})).await;
    assert_eq!(text, "Could not fetch the evolution chain.");
}

// ============================================================================
// Unknown entities across every tool
// ============================================================================

#[tokio::test]
async fn test_every_tool_names_unknown_entity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let registry = registry_for(&server, Locale::English);
    let cases = [
        ("get_pokemon", json!({"name": "Fakemon"})),
        ("get_ability", json!({"name": "Fakemon"})),
        ("get_type", json!({"type_id_or_name": "Fakemon"})),
        ("get_species", json!({"name": "Fakemon"})),
        ("get_evolution_chain", json!({"name": "Fakemon"})),
    ];

    for (tool, args) in cases {
        let text = call(&registry, tool, args).await;
        assert!(
            text.contains("Fakemon"),
            "{tool} placeholder should name the query, got: {text}"
        );
    }
}
