//! Built-in heroes and creatures.

use crate::combatant::CombatantTemplate;
use crate::dice::DiceFamily;

/// The four heroes, in sweep order. All start with 14 willpower.
pub fn builtin_heroes() -> Vec<CombatantTemplate> {
    vec![
        // Warrior
        CombatantTemplate::hero("Thorn", 6, 14, &[(6, 2), (13, 3), (14, 4)], true),
        // Archer
        CombatantTemplate::hero("Chada", 5, 14, &[(6, 3), (13, 4), (14, 5)], false),
        // Wizard
        CombatantTemplate::hero("Eara", 4, 14, &[(6, 1), (13, 1), (14, 1)], false),
        // Dwarf
        CombatantTemplate::hero("Kram", 7, 14, &[(6, 1), (13, 2), (14, 3)], true),
    ]
}

/// Creatures, weakest first.
pub fn builtin_enemies() -> Vec<CombatantTemplate> {
    vec![
        CombatantTemplate::enemy("Gor", 2, 4, &[(4, 2)], DiceFamily::Red),
        CombatantTemplate::enemy("Skral", 6, 6, &[(6, 2)], DiceFamily::Red),
        CombatantTemplate::enemy("Wardrak", 10, 7, &[(6, 1), (7, 2)], DiceFamily::Black),
        CombatantTemplate::enemy("Troll", 14, 12, &[(2, 1), (12, 3)], DiceFamily::Red),
    ]
}
