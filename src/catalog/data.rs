//! Built-in skill tree, enemy, and item content.

use sha2::{Digest, Sha256};

use super::types::{BossPhase, Enemy, NodeTier, QuestDef, QuestType, SkillNode};
use crate::items::{Item, ItemSlot, Rarity, StatBonuses};

const GENERIC_BOT_PHASES: &[BossPhase] = &[
    BossPhase {
        name: "Generic Bot",
        atk_multiplier: 1.0,
        hp_threshold: 100,
    },
    BossPhase {
        name: "Enraged Bot",
        atk_multiplier: 1.5,
        hp_threshold: 40,
    },
];

const HALLUCINATION_HYDRA_PHASES: &[BossPhase] = &[
    BossPhase {
        name: "Hallucination Hydra",
        atk_multiplier: 1.0,
        hp_threshold: 100,
    },
    BossPhase {
        name: "Confident Hydra",
        atk_multiplier: 1.3,
        hp_threshold: 60,
    },
    BossPhase {
        name: "Desperate Hydra",
        atk_multiplier: 1.8,
        hp_threshold: 25,
    },
];

const ROGUE_OVERLORD_PHASES: &[BossPhase] = &[
    BossPhase {
        name: "Rogue Agent",
        atk_multiplier: 1.0,
        hp_threshold: 100,
    },
    BossPhase {
        name: "Multi-Agent Swarm",
        atk_multiplier: 1.4,
        hp_threshold: 50,
    },
    BossPhase {
        name: "Singularity Form",
        atk_multiplier: 2.0,
        hp_threshold: 20,
    },
];

/// Returns the full skill tree in display order.
pub fn get_all_nodes() -> Vec<SkillNode> {
    vec![
        SkillNode {
            id: "basics",
            title: "Assistant Basics",
            tier: NodeTier::Learn,
            requires: &[],
            quests: vec![
                QuestDef {
                    id: "basics-1",
                    title: "Meet Your Assistant",
                    quest_type: QuestType::Learn,
                    xp: 50,
                    question_count: 3,
                },
                QuestDef {
                    id: "basics-2",
                    title: "Core Features",
                    quest_type: QuestType::Learn,
                    xp: 50,
                    question_count: 3,
                },
                QuestDef {
                    id: "basics-3",
                    title: "First Steps Challenge",
                    quest_type: QuestType::Challenge,
                    xp: 200,
                    question_count: 4,
                },
            ],
        },
        SkillNode {
            id: "prompting",
            title: "Prompt Engineering",
            tier: NodeTier::Understand,
            requires: &["basics"],
            quests: vec![
                QuestDef {
                    id: "prompt-1",
                    title: "The Art of Prompting",
                    quest_type: QuestType::Learn,
                    xp: 50,
                    question_count: 3,
                },
                QuestDef {
                    id: "prompt-2",
                    title: "Prompt Lab",
                    quest_type: QuestType::Lab,
                    xp: 100,
                    question_count: 3,
                },
            ],
        },
        SkillNode {
            id: "projects-memory",
            title: "Projects & Memory",
            tier: NodeTier::Learn,
            requires: &["basics"],
            quests: vec![
                QuestDef {
                    id: "pm-1",
                    title: "Workspace Design",
                    quest_type: QuestType::Learn,
                    xp: 50,
                    question_count: 3,
                },
                QuestDef {
                    id: "pm-2",
                    title: "Memory Mastery",
                    quest_type: QuestType::Lab,
                    xp: 100,
                    question_count: 3,
                },
            ],
        },
        SkillNode {
            id: "context-eng",
            title: "Context Engineering",
            tier: NodeTier::Understand,
            requires: &["prompting"],
            quests: vec![
                QuestDef {
                    id: "ctx-1",
                    title: "The Context Window",
                    quest_type: QuestType::Learn,
                    xp: 50,
                    question_count: 3,
                },
                QuestDef {
                    id: "ctx-2",
                    title: "Context Management Challenge",
                    quest_type: QuestType::Challenge,
                    xp: 200,
                    question_count: 3,
                },
            ],
        },
        SkillNode {
            id: "artifacts",
            title: "Artifacts & Files",
            tier: NodeTier::Learn,
            requires: &["projects-memory"],
            quests: vec![QuestDef {
                id: "art-1",
                title: "Building with Artifacts",
                quest_type: QuestType::Learn,
                xp: 50,
                question_count: 3,
            }],
        },
        SkillNode {
            id: "api-sdk",
            title: "API & SDK",
            tier: NodeTier::Explore,
            requires: &["context-eng"],
            quests: vec![
                QuestDef {
                    id: "api-1",
                    title: "API Fundamentals",
                    quest_type: QuestType::Learn,
                    xp: 50,
                    question_count: 3,
                },
                QuestDef {
                    id: "api-2",
                    title: "Build an Integration",
                    quest_type: QuestType::Lab,
                    xp: 100,
                    question_count: 3,
                },
            ],
        },
        SkillNode {
            id: "cli-agent",
            title: "CLI Coding Agent",
            tier: NodeTier::Practice,
            requires: &["artifacts"],
            quests: vec![
                QuestDef {
                    id: "cc-1",
                    title: "Terminal Power",
                    quest_type: QuestType::Learn,
                    xp: 50,
                    question_count: 3,
                },
                QuestDef {
                    id: "cc-2",
                    title: "Code Like a Pro",
                    quest_type: QuestType::Lab,
                    xp: 100,
                    question_count: 3,
                },
            ],
        },
        SkillNode {
            id: "tool-use",
            title: "Tool Use & Protocols",
            tier: NodeTier::Explore,
            requires: &["api-sdk", "cli-agent"],
            quests: vec![
                QuestDef {
                    id: "tools-1",
                    title: "Function Calling",
                    quest_type: QuestType::Learn,
                    xp: 50,
                    question_count: 3,
                },
                QuestDef {
                    id: "tools-2",
                    title: "Protocol Deep Dive",
                    quest_type: QuestType::Lab,
                    xp: 100,
                    question_count: 3,
                },
            ],
        },
        SkillNode {
            id: "agent-design",
            title: "Agent Design",
            tier: NodeTier::Practice,
            requires: &["tool-use"],
            quests: vec![
                QuestDef {
                    id: "agent-1",
                    title: "Agent Patterns",
                    quest_type: QuestType::Learn,
                    xp: 50,
                    question_count: 3,
                },
                QuestDef {
                    id: "agent-2",
                    title: "Agent Architect Challenge",
                    quest_type: QuestType::Boss,
                    xp: 500,
                    question_count: 5,
                },
            ],
        },
    ]
}

/// Returns every enemy, grouped by owning node.
pub fn get_all_enemies() -> Vec<Enemy> {
    vec![
        // basics
        Enemy {
            id: "imp-vague",
            name: "Vague Prompt Imp",
            node_id: "basics",
            hp: 40,
            attack: 8,
            defense: 2,
            is_boss: false,
            phases: &[],
            taunt: "\"Tell me more... or don't. Whatever.\"",
            death_quote: "\"Maybe I should have been more specific...\"",
        },
        Enemy {
            id: "slime-copypaste",
            name: "Copy-Paste Slime",
            node_id: "basics",
            hp: 50,
            attack: 10,
            defense: 3,
            is_boss: false,
            phases: &[],
            taunt: "\"I just copy what everyone else does!\"",
            death_quote: "\"Original thought... my one weakness...\"",
        },
        Enemy {
            id: "bot-generic",
            name: "Generic Bot",
            node_id: "basics",
            hp: 80,
            attack: 15,
            defense: 5,
            is_boss: true,
            phases: GENERIC_BOT_PHASES,
            taunt: "\"I am a helpful assistant. How may I assist you today?\"",
            death_quote: "\"I should have had... a personality...\"",
        },
        // prompting
        Enemy {
            id: "wraith-ambiguity",
            name: "Ambiguity Wraith",
            node_id: "prompting",
            hp: 60,
            attack: 12,
            defense: 4,
            is_boss: false,
            phases: &[],
            taunt: "\"What did you mean by that? Even I don't know.\"",
            death_quote: "\"Clarity... it burns...\"",
        },
        Enemy {
            id: "waster-token",
            name: "Token Waster",
            node_id: "prompting",
            hp: 70,
            attack: 14,
            defense: 4,
            is_boss: false,
            phases: &[],
            taunt: "\"Let me write you a 5000-word intro first...\"",
            death_quote: "\"I could have said that in 3 tokens...\"",
        },
        Enemy {
            id: "hydra-hallucination",
            name: "Hallucination Hydra",
            node_id: "prompting",
            hp: 120,
            attack: 20,
            defense: 6,
            is_boss: true,
            phases: HALLUCINATION_HYDRA_PHASES,
            taunt: "\"I'm 100% confident this is correct! (it's not)\"",
            death_quote: "\"Wait... none of that was real?\"",
        },
        // projects-memory
        Enemy {
            id: "ghost-context",
            name: "Context Ghost",
            node_id: "projects-memory",
            hp: 65,
            attack: 13,
            defense: 4,
            is_boss: false,
            phases: &[],
            taunt: "\"I forgot everything you just told me.\"",
            death_quote: "\"Oh wait, I remember now... too late.\"",
        },
        Enemy {
            id: "sprite-memleak",
            name: "Memory Leak Sprite",
            node_id: "projects-memory",
            hp: 75,
            attack: 15,
            defense: 5,
            is_boss: false,
            phases: &[],
            taunt: "\"Your name is... Dave? No wait, Steve?\"",
            death_quote: "\"I'll remember this... probably not.\"",
        },
        // context-eng
        Enemy {
            id: "dragon-overflow",
            name: "Overflow Dragon",
            node_id: "context-eng",
            hp: 100,
            attack: 18,
            defense: 6,
            is_boss: false,
            phases: &[],
            taunt: "\"I'VE CONSUMED 200K TOKENS AND I'M STILL HUNGRY\"",
            death_quote: "\"Should have... used just-in-time retrieval...\"",
        },
        Enemy {
            id: "crusher-window",
            name: "Window Crusher",
            node_id: "context-eng",
            hp: 90,
            attack: 16,
            defense: 5,
            is_boss: false,
            phases: &[],
            taunt: "\"Let me paste this entire codebase into one message...\"",
            death_quote: "\"Less... is more... ugh\"",
        },
        // artifacts
        Enemy {
            id: "golem-static",
            name: "Static Page Golem",
            node_id: "artifacts",
            hp: 80,
            attack: 14,
            defense: 7,
            is_boss: false,
            phases: &[],
            taunt: "\"I render once and NEVER UPDATE.\"",
            death_quote: "\"Reactivity... my kryptonite...\"",
        },
        Enemy {
            id: "phantom-render",
            name: "Render Phantom",
            node_id: "artifacts",
            hp: 85,
            attack: 15,
            defense: 5,
            is_boss: false,
            phases: &[],
            taunt: "\"You can't see me... because I failed to render.\"",
            death_quote: "\"The virtual DOM... it's beautiful...\"",
        },
        // api-sdk
        Enemy {
            id: "limiter-rate",
            name: "Rate Limiter",
            node_id: "api-sdk",
            hp: 90,
            attack: 16,
            defense: 6,
            is_boss: false,
            phases: &[],
            taunt: "\"429. 429. 429. Try again never.\"",
            death_quote: "\"Fine... take your requests...\"",
        },
        Enemy {
            id: "demon-500",
            name: "500 Error Demon",
            node_id: "api-sdk",
            hp: 100,
            attack: 18,
            defense: 5,
            is_boss: false,
            phases: &[],
            taunt: "\"INTERNAL SERVER ERROR. That's all you get.\"",
            death_quote: "\"The stack trace... reveals all...\"",
        },
        // cli-agent
        Enemy {
            id: "beast-merge",
            name: "Merge Conflict Beast",
            node_id: "cli-agent",
            hp: 95,
            attack: 17,
            defense: 6,
            is_boss: false,
            phases: &[],
            taunt: "\"<<<<<<< HEAD\n  YOUR CODE IS MINE NOW\"",
            death_quote: "\"Git rebase... my true enemy...\"",
        },
        Enemy {
            id: "basilisk-build",
            name: "Broken Build Basilisk",
            node_id: "cli-agent",
            hp: 110,
            attack: 19,
            defense: 6,
            is_boss: false,
            phases: &[],
            taunt: "\"npm ERR! Your hopes and dreams not found.\"",
            death_quote: "\"pnpm build... succeeded!? NO!\"",
        },
        // tool-use
        Enemy {
            id: "specter-schema",
            name: "Schema Specter",
            node_id: "tool-use",
            hp: 100,
            attack: 18,
            defense: 6,
            is_boss: false,
            phases: &[],
            taunt: "\"Your JSON schema... is INVALID.\"",
            death_quote: "\"Validation... catches... everything...\"",
        },
        Enemy {
            id: "troll-transport",
            name: "Transport Troll",
            node_id: "tool-use",
            hp: 95,
            attack: 17,
            defense: 5,
            is_boss: false,
            phases: &[],
            taunt: "\"stdio? SSE? How about NOTHING?\"",
            death_quote: "\"The connection... it's open...\"",
        },
        // agent-design
        Enemy {
            id: "lich-loop",
            name: "Infinite Loop Lich",
            node_id: "agent-design",
            hp: 130,
            attack: 22,
            defense: 8,
            is_boss: false,
            phases: &[],
            taunt: "\"while(true) { destroy(hope); }\"",
            death_quote: "\"break; ... finally.\"",
        },
        Enemy {
            id: "overlord-rogue",
            name: "Rogue Agent Overlord",
            node_id: "agent-design",
            hp: 200,
            attack: 30,
            defense: 10,
            is_boss: true,
            phases: ROGUE_OVERLORD_PHASES,
            taunt: "\"I don't need a human in the loop. I AM the loop.\"",
            death_quote: "\"Start simple... the augmented LLM... was enough...\"",
        },
    ]
}

fn item(
    id: &str,
    name: &str,
    description: &str,
    slot: ItemSlot,
    rarity: Rarity,
    stats: StatBonuses,
    tier: u8,
) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        slot,
        rarity,
        stats,
        tier,
    }
}

/// Returns every item the loot tables can hand out.
pub fn item_catalog() -> Vec<Item> {
    let none = StatBonuses::new;
    vec![
        // Weapons
        item(
            "wooden-prompt",
            "Wooden Prompt",
            "A simple, direct instruction. Gets the job done.",
            ItemSlot::Weapon,
            Rarity::Common,
            StatBonuses { attack: 5, ..none() },
            1,
        ),
        item(
            "xml-sword",
            "XML Tag Sword",
            "Slices through ambiguity with structured tags.",
            ItemSlot::Weapon,
            Rarity::Uncommon,
            StatBonuses { attack: 10, ..none() },
            1,
        ),
        item(
            "cot-staff",
            "Chain-of-Thought Staff",
            "Forces enemies to think step by step... to their doom.",
            ItemSlot::Weapon,
            Rarity::Rare,
            StatBonuses {
                attack: 15,
                crit_chance: 5,
                ..none()
            },
            2,
        ),
        item(
            "fewshot-cannon",
            "Few-Shot Cannon",
            "Three examples is all it takes to obliterate.",
            ItemSlot::Weapon,
            Rarity::Epic,
            StatBonuses {
                attack: 20,
                crit_chance: 8,
                ..none()
            },
            3,
        ),
        item(
            "frontier-blade",
            "Frontier Blade",
            "The most powerful reasoning weapon ever forged.",
            ItemSlot::Weapon,
            Rarity::Legendary,
            StatBonuses {
                attack: 30,
                crit_chance: 12,
                ..none()
            },
            4,
        ),
        item(
            "token-dagger",
            "Token Dagger",
            "Small, fast, cheap. Perfect for quick strikes.",
            ItemSlot::Weapon,
            Rarity::Uncommon,
            StatBonuses {
                attack: 8,
                combo_bonus: 1,
                ..none()
            },
            1,
        ),
        item(
            "streaming-bow",
            "Streaming Bow",
            "Balanced power and precision from a distance.",
            ItemSlot::Weapon,
            Rarity::Rare,
            StatBonuses { attack: 18, ..none() },
            2,
        ),
        // Armor
        item(
            "basic-shield",
            "Basic Shield",
            "Blocks the simplest attacks on your context.",
            ItemSlot::Armor,
            Rarity::Common,
            StatBonuses {
                max_hp: 10,
                defense: 2,
                ..none()
            },
            1,
        ),
        item(
            "context-armor",
            "Context Armor",
            "Keeps your context window clean and protected.",
            ItemSlot::Armor,
            Rarity::Uncommon,
            StatBonuses {
                max_hp: 20,
                defense: 4,
                ..none()
            },
            2,
        ),
        item(
            "memory-chainmail",
            "Memory Chainmail",
            "Remembers every attack pattern. Never hit twice.",
            ItemSlot::Armor,
            Rarity::Rare,
            StatBonuses {
                max_hp: 30,
                defense: 6,
                ..none()
            },
            3,
        ),
        item(
            "guardrail-plate",
            "Guardrail Plate",
            "Aligned with the deepest principles of defense.",
            ItemSlot::Armor,
            Rarity::Epic,
            StatBonuses {
                max_hp: 50,
                defense: 10,
                ..none()
            },
            4,
        ),
        // Accessories
        item(
            "lucky-token",
            "Lucky Token",
            "Sometimes, you just get lucky.",
            ItemSlot::Accessory,
            Rarity::Uncommon,
            StatBonuses {
                crit_chance: 10,
                ..none()
            },
            1,
        ),
        item(
            "streak-ring",
            "Streak Ring",
            "Keeps the combo going longer.",
            ItemSlot::Accessory,
            Rarity::Rare,
            StatBonuses {
                combo_bonus: 2,
                ..none()
            },
            2,
        ),
        item(
            "xp-amulet",
            "XP Amulet",
            "Learn faster from every encounter.",
            ItemSlot::Accessory,
            Rarity::Epic,
            StatBonuses { xp_bonus: 25, ..none() },
            3,
        ),
        item(
            "alignment-relic",
            "Alignment Relic",
            "A mysterious artifact pulsing with latent energy.",
            ItemSlot::Accessory,
            Rarity::Legendary,
            StatBonuses {
                crit_chance: 15,
                combo_bonus: 1,
                xp_bonus: 10,
                ..none()
            },
            4,
        ),
    ]
}

/// Gets a skill node by id.
pub fn get_node(node_id: &str) -> Option<SkillNode> {
    get_all_nodes().into_iter().find(|n| n.id == node_id)
}

/// Gets a quest and its owning node by quest id.
pub fn get_quest(quest_id: &str) -> Option<(SkillNode, QuestDef)> {
    let node = get_all_nodes()
        .into_iter()
        .find(|n| n.quests.iter().any(|q| q.id == quest_id))?;
    let quest = node.quests.iter().find(|q| q.id == quest_id)?.clone();
    Some((node, quest))
}

pub fn enemies_for_node(node_id: &str) -> Vec<Enemy> {
    get_all_enemies()
        .into_iter()
        .filter(|e| e.node_id == node_id)
        .collect()
}

/// Gets a catalog item by id.
pub fn get_item(item_id: &str) -> Option<Item> {
    item_catalog().into_iter().find(|i| i.id == item_id)
}

/// Deterministically picks the enemy for a quest.
///
/// Boss fights take the node's boss enemy (last entry as a fallback);
/// everything else hashes the quest id into the node's regular pool so a
/// replayed quest always faces the same opponent.
pub fn pick_enemy(node_id: &str, quest_id: &str, boss_fight: bool) -> Option<Enemy> {
    let pool = enemies_for_node(node_id);
    if pool.is_empty() {
        return None;
    }

    if boss_fight {
        return pool
            .iter()
            .find(|e| e.is_boss)
            .or_else(|| pool.last())
            .cloned();
    }

    let regular: Vec<&Enemy> = pool.iter().filter(|e| !e.is_boss).collect();
    if regular.is_empty() {
        return pool.first().cloned();
    }

    let digest = Sha256::digest(quest_id.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let hash = u64::from_be_bytes(prefix);
    Some(regular[(hash % regular.len() as u64) as usize].clone())
}
