use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

const RED_FACES: [i32; 6] = [1, 2, 3, 4, 5, 6];
const BLACK_FACES: [i32; 6] = [6, 6, 8, 10, 10, 12];

/// A named multiset of die faces.
///
/// Heroes and most creatures roll red dice. Black dice carry duplicated 6s and
/// 10s, so those faces come up twice as often as 8 or 12.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DiceFamily {
    Red,
    Black,
}

impl DiceFamily {
    /// Faces in ascending order, duplicates included.
    pub fn faces(self) -> &'static [i32] {
        match self {
            DiceFamily::Red => &RED_FACES,
            DiceFamily::Black => &BLACK_FACES,
        }
    }

    /// Arithmetic mean of the listed faces.
    pub fn mean_face(self) -> f64 {
        let faces = self.faces();
        faces.iter().sum::<i32>() as f64 / faces.len() as f64
    }

    /// Probability that `dice` independent draws all show the same value.
    ///
    /// Sums `(count / len)^dice` over the distinct face values, so duplicated
    /// faces weigh in: red gives 1/6 for two dice, black gives 10/36.
    pub fn tie_probability(self, dice: u32) -> f64 {
        let faces = self.faces();
        let len = faces.len() as f64;

        faces
            .chunk_by(|a, b| a == b)
            .map(|run| (run.len() as f64 / len).powi(dice as i32))
            .sum()
    }
}
