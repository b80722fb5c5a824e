//! Core types shared by the scoring and combat pipelines

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! stat_types {
    ($($variant:ident => $key:literal,)*) => {
        /// Canonical stat key that every contribution is normalized into
        ///
        /// The serialized form is the key emitted by the data source
        /// (`"WeaponFixingDamage"`, `"STR"`, ...). `Unknown` is the bucket
        /// for labels the catalog could not resolve.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum StatType {
            $(
                #[serde(rename = $key)]
                $variant,
            )*
            Unknown,
        }

        impl StatType {
            /// Every known stat type, `Unknown` excluded
            pub const ALL: &'static [StatType] = &[$(StatType::$variant,)*];

            /// Key as emitted by the data source
            pub fn as_key(&self) -> &'static str {
                match self {
                    $(StatType::$variant => $key,)*
                    StatType::Unknown => "Unknown",
                }
            }

            /// Parse a data source key. `"Unknown"` is not accepted.
            pub fn from_key(key: &str) -> Option<StatType> {
                match key {
                    $($key => Some(StatType::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

stat_types! {
    NoStat => "None",

    // Primary attributes
    Str => "STR",
    Dex => "DEX",
    Int => "INT",
    Con => "CON",
    Agi => "AGI",
    Wis => "WIS",

    // Secondary attributes
    Justice => "Justice",
    Freedom => "Freedom",
    Illusion => "Illusion",
    Life => "Life",
    Time => "Time",
    Light => "Light",
    Destruction => "Destruction",
    Death => "Death",
    Wisdom => "Wisdom",
    Destiny => "Destiny",
    Space => "Space",
    Dark => "Dark",

    // Attack and defense
    WeaponFixingDamage => "WeaponFixingDamage",
    FixingDamage => "FixingDamage",
    DamageRatio => "DamageRatio",
    ArmorDefense => "ArmorDefense",
    Defense => "Defense",
    DefenseRatio => "DefenseRatio",
    DefensePierce => "DefensePierce",

    // Accuracy, evasion, critical
    AccuracyRatio => "AccuracyRatio",
    CriticalRatio => "CriticalRatio",
    HpMaxRatio => "HPMaxRatio",
    WeaponAccuracy => "WeaponAccuracy",
    WeaponCritical => "WeaponCritical",
    ArmorEvasion => "ArmorEvasion",
    Accuracy => "Accuracy",
    Evasion => "Evasion",
    Critical => "Critical",
    CriticalResist => "CriticalResist",
    CriticalResistRatio => "CriticalResistRatio",

    // Resources and speed
    HpMax => "HPMax",
    MpMax => "MPMax",
    CombatSpeed => "CombatSpeed",
    MoveSpeed => "MoveSpeed",

    // Bonus damage
    SealStoneAddDamage => "SealStoneAddDamage",
    CriticalAddDamage => "CriticalAddDamage",
    CriticalDamageDefense => "CriticalDamageDefense",
    BackAttackDamage => "BackAttackDamage",
    BackAttackDefense => "BackAttackDefense",

    // Amplification
    AmplifyAllDamage => "AmplifyAllDamage",
    DecreaseDamage => "DecreaseDamage",
    AmplifyWeaponDamage => "AmplifyWeaponDamage",
    DecreaseWeaponDamage => "DecreaseWeaponDamage",
    AmplifyCriticalDamage => "AmplifyCriticalDamage",
    DecreaseCriticalDamage => "DecreaseCriticalDamage",
    AmplifyBackAttack => "AmplifyBackAttack",
    DecreaseBackAttack => "DecreaseBackAttack",

    // Special hits
    AdditionalHitRate => "AdditionalHitRate",
    AdditionalHitResistRate => "AdditionalHitResistRate",
    BackCritical => "BackCritical",
    BackCriticalResist => "BackCriticalResist",
    Block => "Block",
    WeaponBlockPierce => "WeaponBlockPierce",
    ShieldBlock => "ShieldBlock",
    ShieldBlockPierce => "ShieldBlockPierce",
    Restoration => "Restoration",
    RestorationPierce => "RestorationPierce",
    Perfect => "Perfect",
    HardHit => "HardHit",
    PerfectResist => "PerfectResist",
    HardHitResist => "HardHitResist",

    // PvE and boss
    PveAddDamage => "PvEAddDamage",
    PveDamageDefense => "PvEDamageDefense",
    PveAccuracy => "PvEAccuracy",
    PveEvasion => "PvEEvasion",
    PveAmplifyDamage => "PvEAmplifyDamage",
    PveDecreaseDamage => "PvEDecreaseDamage",
    BossNpcAddDamage => "BossNpcAddDamage",
    BossNpcDefense => "BossNpcDefense",
    BossNpcAmplifyDamage => "BossNpcAmplifyDamage",
    BossNpcDecreaseDamage => "BossNpcDecreaseDamage",
    CoolTimeDecrease => "CoolTimeDecrease",

    // Only produced by attribute conversion
    EvasionRatio => "EvasionRatio",
    StatusHit => "StatusHit",
    HpRatio => "HPRatio",
    StatusResist => "StatusResist",
    Cooldown => "Cooldown",
    BlockPierce => "BlockPierce",
    Regen => "Regen",
    RegenPierce => "RegenPierce",
    MpCost => "MPCost",
    MpRatio => "MPRatio",
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Display unit of a stat value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "%")]
    Percent,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Percent => "%",
        }
    }
}

/// Hit modifiers counted by the telemetry producer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecialHit {
    Critical,
    Back,
    Double,
    Endure,
    Parry,
    Perfect,
}

impl SpecialHit {
    /// Every special hit kind shown in skill breakdowns
    pub fn all() -> &'static [SpecialHit] {
        &[
            SpecialHit::Critical,
            SpecialHit::Back,
            SpecialHit::Double,
            SpecialHit::Endure,
            SpecialHit::Parry,
            SpecialHit::Perfect,
        ]
    }

    /// Counter key used in `special_counts`
    pub fn key(&self) -> &'static str {
        match self {
            SpecialHit::Critical => "CRITICAL",
            SpecialHit::Back => "BACK",
            SpecialHit::Double => "DOUBLE",
            SpecialHit::Endure => "ENDURE",
            SpecialHit::Parry => "PARRY",
            SpecialHit::Perfect => "PERFECT",
        }
    }

    /// Parse a counter key. Producer-internal keys (`UNKNOWN`, `POWER_SHARD`, ...) yield `None`.
    pub fn from_key(key: &str) -> Option<SpecialHit> {
        SpecialHit::all().iter().copied().find(|s| s.key() == key)
    }
}
