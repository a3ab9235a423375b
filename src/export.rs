use serde::{Deserialize, Serialize};

use crate::core::{level_rows, GameState, MazeModel, Pushable, Vec2};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonPosition {
    pub row: i32,
    pub col: i32,
}

impl From<Vec2> for JsonPosition {
    fn from(v: Vec2) -> Self {
        JsonPosition { row: v.i, col: v.j }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonObject {
    pub name: String,
    pub position: Option<JsonPosition>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub rows: i32,
    pub cols: i32,
    pub player: JsonPosition,
    pub state: String,
    pub cells: Vec<String>,
    pub objects: Vec<JsonObject>,
}

impl BoardSnapshot {
    pub fn from_maze(maze: &MazeModel) -> Self {
        BoardSnapshot {
            rows: maze.rows(),
            cols: maze.cols(),
            player: maze.player().into(),
            state: match maze.state() {
                GameState::InProgress => "InProgress",
                GameState::Won => "Won",
            }
            .to_string(),
            cells: level_rows(maze),
            objects: Pushable::CHAIN
                .iter()
                .map(|&object| JsonObject {
                    name: object.name().to_string(),
                    position: maze.find(object).map(JsonPosition::from),
                })
                .collect(),
        }
    }
}

pub fn get_json_data(maze: &MazeModel) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&BoardSnapshot::from_maze(maze))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{parse_level, Direction};

    #[test]
    fn test_snapshot_lists_objects_in_chain_order() {
        let maze = parse_level("0-5432").expect("parses");
        let snapshot = BoardSnapshot::from_maze(&maze);

        let names: Vec<&str> = snapshot.objects.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["shovel", "bean", "fertilizer", "water"]);
        assert_eq!(snapshot.objects[0].position, Some(JsonPosition { row: 0, col: 5 }));
        assert_eq!(snapshot.objects[3].position, Some(JsonPosition { row: 0, col: 2 }));
    }

    #[test]
    fn test_json_shape() {
        let mut maze = parse_level("-0--!234-!---5").expect("parses");
        maze.attempt_move(Direction::Right);
        let json: serde_json::Value = serde_json::from_str(&get_json_data(&maze).expect("serializes"))
            .expect("valid json");

        assert_eq!(json["rows"], 3);
        assert_eq!(json["cols"], 4);
        assert_eq!(json["player"]["row"], 0);
        assert_eq!(json["player"]["col"], 2);
        assert_eq!(json["state"], "InProgress");
        assert_eq!(json["cells"][0], "--0-");
        assert_eq!(json["objects"][1]["name"], "bean");
        assert_eq!(json["objects"][3]["position"]["col"], 3);
    }

    #[test]
    fn test_won_state_is_reported() {
        let mut maze = parse_level("234-!---5!---0").expect("parses");
        maze.attempt_move(Direction::Up);
        let snapshot = BoardSnapshot::from_maze(&maze);

        assert_eq!(snapshot.state, "Won");
        assert_eq!(snapshot.player, JsonPosition { row: 1, col: 3 });
        assert_eq!(snapshot.cells, vec!["2345", "---0", "----"]);
    }
}
