use std::fmt::Write;

use crate::models::Player;

/// One text card per player. Each card carries its own id in the affordance
/// hints so the user always removes or inspects the card they are looking at.
pub fn render_card(player: &Player) -> String {
    format!(
        "#{id}  {name}\n\
         \x20    Breed: {breed}\n\
         \x20    Age:   {age} years\n\
         \x20    [details {id}] [remove {id}]\n",
        id = player.id,
        name = player.name,
        breed = player.breed,
        age = player.age,
    )
}

/// Rebuilds the whole roster view from scratch. No diffing; every call
/// replaces whatever was shown before.
pub fn render_roster(players: &[Player]) -> String {
    if players.is_empty() {
        return "The roster is empty. Add a puppy with `add <name> <breed> <age>`.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "Roster ({} players)", players.len());
    for player in players {
        out.push('\n');
        out.push_str(&render_card(player));
    }
    out
}

/// Detail view for a single fetched player.
pub fn render_player(player: &Player) -> String {
    format!(
        "Player #{id}\n\
         \x20 Name:  {name}\n\
         \x20 Breed: {breed}\n\
         \x20 Age:   {age} years\n",
        id = player.id,
        name = player.name,
        breed = player.breed,
        age = player.age,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u64, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            breed: "Lab".to_string(),
            age: 3,
        }
    }

    #[test]
    fn roster_has_one_card_per_player_in_input_order() {
        let players = vec![player(3, "Rex"), player(1, "Fido"), player(7, "Bella")];
        let out = render_roster(&players);

        let card_starts: Vec<usize> = ["#3  Rex", "#1  Fido", "#7  Bella"]
            .iter()
            .map(|needle| out.find(needle).expect("card present"))
            .collect();
        assert!(card_starts[0] < card_starts[1]);
        assert!(card_starts[1] < card_starts[2]);
        assert_eq!(out.matches("[remove ").count(), 3);
    }

    #[test]
    fn card_captures_its_own_id_in_both_affordances() {
        let out = render_card(&player(42, "Rex"));
        assert!(out.contains("[details 42]"));
        assert!(out.contains("[remove 42]"));
        assert!(!out.contains("[remove 43]"));
    }

    #[test]
    fn card_shows_name_breed_and_age() {
        let out = render_card(&player(1, "Rex"));
        assert!(out.contains("Rex"));
        assert!(out.contains("Breed: Lab"));
        assert!(out.contains("Age:   3 years"));
    }

    #[test]
    fn empty_roster_renders_placeholder() {
        let out = render_roster(&[]);
        assert!(out.contains("roster is empty"));
        assert!(!out.contains("[remove"));
    }

    #[test]
    fn detail_view_shows_all_fields() {
        let out = render_player(&player(9, "Bella"));
        assert!(out.contains("Player #9"));
        assert!(out.contains("Bella"));
        assert!(out.contains("Lab"));
        assert!(out.contains("3 years"));
    }
}
