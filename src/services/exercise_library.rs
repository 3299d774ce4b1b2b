use crate::models::{ExerciseDetail, ExerciseTag};

/// Static reference content keyed by exercise tag
#[derive(Debug, Clone, Default)]
pub struct ExerciseLibrary;

impl ExerciseLibrary {
    pub fn new() -> Self {
        Self
    }

    /// Look up the reference entry for a tag; every tag has one
    pub fn detail(&self, tag: ExerciseTag) -> ExerciseDetail {
        match tag {
            ExerciseTag::CompoundLifts => entry(
                tag,
                "Compound Lifts",
                "Strength",
                "Intermediate",
                &["Legs", "Back", "Chest", "Shoulders"],
                &["Barbell", "Squat rack", "Bench"],
            ),
            ExerciseTag::ProgressiveOverload => entry(
                tag,
                "Progressive Overload Training",
                "Strength",
                "Intermediate",
                &["Full body"],
                &["Barbell", "Dumbbells", "Machines"],
            ),
            ExerciseTag::StrengthTraining => entry(
                tag,
                "Strength Training",
                "Strength",
                "Beginner",
                &["Full body"],
                &["Dumbbells", "Machines"],
            ),
            ExerciseTag::BodyweightStrength => entry(
                tag,
                "Bodyweight Strength",
                "Strength",
                "Beginner",
                &["Chest", "Legs", "Core"],
                &[],
            ),
            ExerciseTag::ResistanceBands => entry(
                tag,
                "Resistance Band Training",
                "Strength",
                "Beginner",
                &["Arms", "Shoulders", "Glutes"],
                &["Resistance bands"],
            ),
            ExerciseTag::Cardio => entry(
                tag,
                "Cardio Training",
                "Cardio",
                "Beginner",
                &["Heart", "Legs"],
                &["Treadmill", "Elliptical", "Rowing machine"],
            ),
            ExerciseTag::LowImpactCardio => entry(
                tag,
                "Low-Impact Cardio",
                "Cardio",
                "Beginner",
                &["Heart", "Legs"],
                &["Elliptical", "Recumbent bike"],
            ),
            ExerciseTag::Hiit => entry(
                tag,
                "High-Intensity Interval Training",
                "Cardio",
                "Advanced",
                &["Full body"],
                &["Timer", "Kettlebell"],
            ),
            ExerciseTag::Walking => entry(tag, "Brisk Walking", "Cardio", "Beginner", &["Legs"], &["Treadmill"]),
            ExerciseTag::Cycling => entry(
                tag,
                "Stationary Cycling",
                "Cardio",
                "Beginner",
                &["Quadriceps", "Hamstrings", "Calves"],
                &["Stationary bike"],
            ),
            ExerciseTag::Swimming => entry(tag, "Swimming", "Cardio", "Intermediate", &["Full body"], &["Pool"]),
            ExerciseTag::WaterAerobics => entry(
                tag,
                "Water Aerobics",
                "Cardio",
                "Beginner",
                &["Full body"],
                &["Pool"],
            ),
            ExerciseTag::ChairExercises => entry(
                tag,
                "Chair Exercises",
                "Mobility",
                "Beginner",
                &["Arms", "Legs", "Core"],
                &["Chair"],
            ),
            ExerciseTag::CoreWork => entry(
                tag,
                "Core Training",
                "Strength",
                "Beginner",
                &["Abdominals", "Lower back", "Obliques"],
                &["Mat"],
            ),
            ExerciseTag::Stretching => entry(
                tag,
                "Stretching",
                "Flexibility",
                "Beginner",
                &["Full body"],
                &["Mat"],
            ),
            ExerciseTag::Yoga => entry(tag, "Yoga", "Flexibility", "Beginner", &["Full body"], &["Mat"]),
            ExerciseTag::Mobility => entry(
                tag,
                "Mobility Drills",
                "Flexibility",
                "Beginner",
                &["Hips", "Shoulders", "Spine"],
                &["Foam roller"],
            ),
            ExerciseTag::BalanceTraining => entry(
                tag,
                "Balance Training",
                "Mobility",
                "Beginner",
                &["Core", "Ankles"],
                &["Balance board"],
            ),
        }
    }

    /// Resolve a serialized key into its reference entry
    pub fn lookup(&self, key: &str) -> Option<ExerciseDetail> {
        ExerciseTag::from_key(key).map(|tag| self.detail(tag))
    }
}

fn entry(
    tag: ExerciseTag,
    name: &'static str,
    category: &'static str,
    difficulty: &'static str,
    muscle_groups: &'static [&'static str],
    equipment: &'static [&'static str],
) -> ExerciseDetail {
    ExerciseDetail {
        tag,
        name,
        category,
        difficulty,
        muscle_groups,
        equipment,
    }
}
