//! The fixed roster of tracked characters.

use crate::character::Character;
use std::sync::OnceLock;

use crate::types::Priority::{P0, P1, P2};
use crate::types::Status::{Doing, Done, Revision, Todo};

/// All tracked characters in board order.
pub fn roster() -> &'static [Character] {
    static ROSTER: OnceLock<Vec<Character>> = OnceLock::new();
    ROSTER.get_or_init(|| {
        vec![
            Character::new("1002", "艾琳", "女主", P0, [Done, Done, Done, Doing]),
            Character::new("1011", "艾德里安", "男一", P0, [Done, Revision, Todo, Todo]),
            Character::new("1003", "卢卡斯", "渣男", P0, [Done, Revision, Todo, Todo]),
            Character::new("1004", "麦迪森", "渣女", P0, [Done, Revision, Todo, Todo]),
            Character::new("1012", "伊森", "男二", P1, [Doing, Revision, Todo, Todo]),
            Character::new("1013", "卡西安", "男三", P0, [Doing, Revision, Todo, Todo]),
            Character::new("1014", "艾薇", "男一未婚妻", P1, [Done, Done, Doing, Todo]),
            Character::new("1005", "史密斯", "管家", P0, [Done, Done, Doing, Todo]),
            Character::new("1006", "朱利安", "律师", P0, [Done, Done, Doing, Todo]),
            Character::new("1007", "祖丽", "闺蜜", P1, [Revision, Revision, Doing, Todo]),
            Character::new("1008", "小杰特", "豹猫", P0, [Done, Done, Done, Todo]),
            Character::new("1001", "老爷爷Revan", "男三老年", P0, [Doing, Todo, Todo, Todo]),
            Character::new("1009", "迦文", "管理员", P0, [Doing, Todo, Todo, Todo]),
            Character::new("1015", "混混A", "npc", P2, [Todo, Todo, Todo, Todo]),
        ]
    })
}

pub fn find(id: &str) -> Option<&'static Character> {
    roster().iter().find(|c| c.id == id)
}
