use crate::api::Transport;
use crate::config::{ClientConfig, MemberFailurePolicy};
use crate::errors::TransportError;
use crate::service::PokedexService;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const BASE: &str = "http://pokeapi.test/api/v2";

#[derive(Debug, Clone)]
enum MockResponse {
    Json { body: String, delay: Duration },
    Status(u16),
    NetworkDown,
}

/// In-memory API. Unregistered URLs answer 404.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, MockResponse>>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, path: &str, body: Value) -> Self {
        self.with_delayed_json(path, body, Duration::ZERO)
    }

    /// Registers a body that is only returned after `delay`, to force a
    /// completion order on concurrent lookups.
    pub fn with_delayed_json(self, path: &str, body: Value, delay: Duration) -> Self {
        self.insert(
            path,
            MockResponse::Json {
                body: body.to_string(),
                delay,
            },
        )
    }

    pub fn with_status(self, path: &str, status: u16) -> Self {
        self.insert(path, MockResponse::Status(status))
    }

    pub fn with_network_failure(self, path: &str) -> Self {
        self.insert(path, MockResponse::NetworkDown)
    }

    fn insert(self, path: &str, response: MockResponse) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url(path), response);
        self
    }

    /// URLs requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        let response = self.responses.lock().unwrap().get(url).cloned();
        match response {
            Some(MockResponse::Json { body, delay }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(body)
            }
            Some(MockResponse::Status(status)) => Err(TransportError::Status(status)),
            Some(MockResponse::NetworkDown) => {
                Err(TransportError::Network("connection refused".to_string()))
            }
            None => Err(TransportError::Status(404)),
        }
    }
}

pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

pub fn test_config() -> ClientConfig {
    ClientConfig {
        base_url: BASE.to_string(),
        ..ClientConfig::default()
    }
}

pub fn service(transport: MockTransport) -> (PokedexService, Arc<MockTransport>) {
    service_with_config(transport, test_config())
}

pub fn service_with_policy(
    transport: MockTransport,
    policy: MemberFailurePolicy,
) -> (PokedexService, Arc<MockTransport>) {
    let config = ClientConfig {
        member_failure: policy,
        ..test_config()
    };
    service_with_config(transport, config)
}

pub fn service_with_config(
    transport: MockTransport,
    config: ClientConfig,
) -> (PokedexService, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    let service = PokedexService::with_transport(config, transport.clone());
    (service, transport)
}

// --- JSON fixtures shaped like the real API ---

fn named(name: &str, path: &str) -> Value {
    json!({ "name": name, "url": url(path) })
}

fn language(tag: &str) -> Value {
    json!({ "name": tag, "url": url(&format!("/language/{}/", tag)) })
}

/// A core record. Ability and stat locators point at `/ability/{name}/` and
/// `/stat/{name}/`.
pub fn pokemon_json(
    id: u32,
    name: &str,
    types: &[&str],
    abilities: &[(&str, bool)],
    stats: &[(&str, u16)],
) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "sprites": {
            "front_default": format!("https://img.test/{}.png", id),
            "back_default": format!("https://img.test/back/{}.png", id),
            "front_shiny": null,
            "back_shiny": null,
            "other": {
                "official-artwork": {
                    "front_default": format!("https://img.test/artwork/{}.png", id)
                }
            }
        },
        "types": types.iter().enumerate().map(|(i, t)| json!({
            "slot": i + 1,
            "type": named(t, &format!("/type/{}/", t)),
        })).collect::<Vec<_>>(),
        "abilities": abilities.iter().map(|(a, hidden)| json!({
            "ability": named(a, &format!("/ability/{}/", a)),
            "is_hidden": hidden,
            "slot": 1,
        })).collect::<Vec<_>>(),
        "stats": stats.iter().map(|(s, base)| {
            let effort = if *s == "speed" { 2 } else { 0 };
            json!({
                "base_stat": base,
                "effort": effort,
                "stat": named(s, &format!("/stat/{}/", s)),
            })
        }).collect::<Vec<_>>(),
    })
}

/// Ability detail with one effect entry per `(language, effect, short_effect)`.
pub fn ability_json(entries: &[(&str, &str, &str)]) -> Value {
    json!({
        "effect_entries": entries.iter().map(|(lang, effect, short)| json!({
            "effect": effect,
            "short_effect": short,
            "language": language(lang),
        })).collect::<Vec<_>>()
    })
}

pub fn stat_json(names: &[(&str, &str)]) -> Value {
    json!({
        "names": names.iter().map(|(lang, name)| json!({
            "name": name,
            "language": language(lang),
        })).collect::<Vec<_>>()
    })
}

pub fn species_json(chain_id: Option<u32>, flavor: &[(&str, &str)]) -> Value {
    json!({
        "flavor_text_entries": flavor.iter().map(|(lang, text)| json!({
            "flavor_text": text,
            "language": language(lang),
            "version": named("red", "/version/1/"),
        })).collect::<Vec<_>>(),
        "habitat": named("forest", "/pokemon-habitat/2/"),
        "generation": named("generation-i", "/generation/1/"),
        "color": named("yellow", "/pokemon-color/10/"),
        "growth_rate": named("medium", "/growth-rate/2/"),
        "base_happiness": 50,
        "capture_rate": 190,
        "is_legendary": false,
        "is_mythical": false,
        "evolution_chain": chain_id.map(|id| json!({ "url": url(&format!("/evolution-chain/{}/", id)) })),
    })
}

pub fn chain_link(id: u32, name: &str, evolves_to: Vec<Value>) -> Value {
    json!({
        "species": named(name, &format!("/pokemon-species/{}/", id)),
        "evolves_to": evolves_to,
    })
}

pub fn characteristic_json(descriptions: &[(&str, &str)]) -> Value {
    json!({
        "descriptions": descriptions.iter().map(|(lang, text)| json!({
            "description": text,
            "language": language(lang),
        })).collect::<Vec<_>>()
    })
}

pub fn page_json(names: &[&str]) -> Value {
    json!({
        "count": 1302,
        "next": null,
        "previous": null,
        "results": names.iter().map(|n| named(n, &format!("/pokemon/{}/", n))).collect::<Vec<_>>(),
    })
}

/// Type membership listing ids `ids` in the given order.
pub fn type_members_json(ids: &[u32]) -> Value {
    json!({
        "pokemon": ids.iter().map(|id| json!({
            "pokemon": named(&format!("mon-{}", id), &format!("/pokemon/{}/", id)),
            "slot": 1,
        })).collect::<Vec<_>>()
    })
}

/// A minimal core record with no abilities or stats and nothing behind it.
pub fn bare_pokemon(transport: MockTransport, id: u32) -> MockTransport {
    transport.with_json(
        &format!("/pokemon/{}", id),
        pokemon_json(id, &format!("mon-{}", id), &["normal"], &[], &[]),
    )
}

pub const PIKACHU_STATS: [(&str, u16); 6] = [
    ("hp", 35),
    ("attack", 55),
    ("defense", 40),
    ("special-attack", 50),
    ("special-defense", 50),
    ("speed", 90),
];

/// A complete, healthy API for Pikachu: core record, two abilities, six
/// stats, species, characteristic and a three-stage chain.
pub fn pikachu_api() -> MockTransport {
    let mut transport = MockTransport::new()
        .with_json(
            "/pokemon/pikachu",
            pokemon_json(
                25,
                "pikachu",
                &["electric"],
                &[("static", false), ("lightning-rod", true)],
                &PIKACHU_STATS,
            ),
        )
        .with_json(
            "/ability/static/",
            ability_json(&[
                ("en", "Contact may\nparalyze.", "May paralyze on contact."),
                ("es", "Puede paralizar\nal contacto.", "Puede paralizar."),
            ]),
        )
        .with_json(
            "/ability/lightning-rod/",
            ability_json(&[(
                "en",
                "Draws in Electric moves.",
                "Redirects Electric moves.",
            )]),
        )
        .with_json(
            "/pokemon-species/25",
            species_json(
                Some(10),
                &[
                    ("en", "When several of\nthese POKéMON gather,\u{000C}their electricity..."),
                    ("es", "Cuando se juntan\nvarios, su electricidad..."),
                ],
            ),
        )
        .with_json(
            "/characteristic/25",
            characteristic_json(&[("en", "Likes to run"), ("es", "Le gusta correr")]),
        )
        .with_json(
            "/evolution-chain/10",
            json!({
                "chain": chain_link(172, "pichu", vec![
                    chain_link(25, "pikachu", vec![chain_link(26, "raichu", vec![])]),
                ])
            }),
        );

    for (stat, _) in PIKACHU_STATS {
        let display = match stat {
            "hp" => "PS",
            "attack" => "Ataque",
            "defense" => "Defensa",
            "special-attack" => "Ataque Especial",
            "special-defense" => "Defensa Especial",
            _ => "Velocidad",
        };
        transport = transport.with_json(
            &format!("/stat/{}/", stat),
            stat_json(&[("en", stat), ("es", display)]),
        );
    }
    transport
}
