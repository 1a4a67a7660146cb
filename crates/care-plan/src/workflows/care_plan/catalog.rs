use super::domain::{Qualification, TaskDefinition, TaskId};

/// Read-only lookup over the long-term care service task list.
#[derive(Debug, Clone, Copy)]
pub struct TaskCatalog {
    tasks: &'static [TaskDefinition],
}

impl TaskCatalog {
    /// The 42 long-term care insurance service tasks.
    pub fn standard() -> Self {
        Self {
            tasks: &STANDARD_TASKS,
        }
    }

    pub fn lookup(&self, id: TaskId) -> Option<&'static TaskDefinition> {
        let tasks = self.tasks;
        tasks
            .binary_search_by_key(&id, |task| task.id)
            .ok()
            .map(|index| &tasks[index])
    }

    pub fn nurse_only_ids(&self) -> impl Iterator<Item = TaskId> {
        let tasks = self.tasks;
        tasks
            .iter()
            .filter(|task| task.qualification == Qualification::NurseOnly)
            .map(|task| task.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static TaskDefinition> {
        let tasks = self.tasks;
        tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for TaskCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

const fn task(
    id: TaskId,
    name: &'static str,
    min_duration: u32,
    qualification: Qualification,
    description: &'static str,
) -> TaskDefinition {
    TaskDefinition {
        id,
        name,
        min_duration,
        qualification,
        description: Some(description),
    }
}

// Sorted by id; `lookup` relies on it.
static STANDARD_TASKS: [TaskDefinition; 42] = [
    task(1, "Head and face cleaning and grooming", 10, Qualification::Any, "Clean face, comb hair, shave"),
    task(2, "Hair washing", 20, Qualification::Any, "Wash hair in comfortable position"),
    task(3, "Nail care", 10, Qualification::Any, "Trim fingernails/toenails, treat onychomycosis"),
    task(4, "Hand and foot cleaning", 15, Qualification::Any, "Wash hands and feet"),
    task(5, "Warm water bath", 30, Qualification::Any, "Full body warm water bath"),
    task(6, "Bedside hair washing", 25, Qualification::Any, "Wash hair for bedridden patients"),
    task(7, "Assist with eating/drinking", 15, Qualification::Any, "Assist with eating and drinking"),
    task(8, "Oral care", 15, Qualification::Any, "Brush teeth, rinse mouth, clean oral cavity"),
    task(9, "Dressing and undressing", 15, Qualification::Any, "Assist with dressing and undressing"),
    task(10, "Bed making", 20, Qualification::Any, "Change bed sheets and covers"),
    task(11, "Bowel and bladder care", 20, Qualification::Any, "Assist with elimination, use bedpan"),
    task(12, "Incontinence care", 20, Qualification::Any, "Skin cleaning and care after incontinence"),
    task(13, "Constipation care", 20, Qualification::Any, "Non-invasive measures to relieve constipation"),
    task(14, "Manual fecal extraction", 15, Qualification::NurseOnly, "Manual fecal extraction"),
    task(15, "Daily personal hygiene assistance", 15, Qualification::Any, "Daily grooming such as washing face and hands"),
    task(16, "Sleep and environment care", 15, Qualification::Any, "Positioning, adjust environment"),
    task(17, "Bed sheet/mattress pad change", 15, Qualification::Any, "Change soiled bed sheets and mattress pads"),
    task(18, "Medication management", 15, Qualification::Any, "Guide or manage medications"),
    task(19, "Turning and back tapping", 20, Qualification::Any, "Turn patient, tap back to expectorate"),
    task(20, "Sitting and mobility assistance", 20, Qualification::Any, "Assist bedridden patients to sit up or move"),
    task(21, "Walking and stair climbing", 20, Qualification::Any, "Assist with walking on level ground or climbing stairs"),
    task(22, "Topical medication", 15, Qualification::Any, "Apply or patch external medication"),
    task(23, "Cognitive function support and companionship", 20, Qualification::Any, "Communication, cognitive training"),
    task(24, "Functional exercise", 30, Qualification::Any, "Limb function training"),
    task(25, "Pressure ulcer prevention care", 20, Qualification::Any, "Turn patient, check high-risk areas"),
    task(26, "Indwelling catheter care", 15, Qualification::NurseOnly, "Catheter and urine bag management"),
    task(27, "Ostomy care", 20, Qualification::NurseOnly, "Intestinal/urinary ostomy care"),
    task(28, "Bowel movement assistance", 15, Qualification::NurseOnly, "Enema suppository/enema/rectal medication"),
    task(29, "Nasogastric tube care", 20, Qualification::NurseOnly, "Nasogastric tube care"),
    task(30, "Medication supervision and reminders", 10, Qualification::Any, "Remind and supervise medication taking"),
    task(31, "Physical cooling", 15, Qualification::Any, "Warm water/alcohol bath for fever reduction"),
    task(32, "Vital signs monitoring", 15, Qualification::Any, "Temperature, pulse, respiration, blood pressure"),
    task(33, "Oxygen inhalation", 20, Qualification::NurseOnly, "Nasal cannula oxygen"),
    task(34, "Enema", 20, Qualification::NurseOnly, "Enema administration"),
    task(35, "One-time catheterization", 20, Qualification::NurseOnly, "Temporary catheterization"),
    task(36, "Blood glucose monitoring", 10, Qualification::Any, "Fingerstick blood glucose testing"),
    task(37, "Wound care", 20, Qualification::NurseOnly, "Dressing change, wound cleaning"),
    task(38, "Venous blood sample collection", 15, Qualification::NurseOnly, "Blood draw"),
    task(39, "Intramuscular injection", 15, Qualification::NurseOnly, "Intramuscular injection"),
    task(40, "Subcutaneous injection", 15, Qualification::NurseOnly, "Subcutaneous injection"),
    task(41, "Drainage tube care", 20, Qualification::NurseOnly, "Various drainage tube maintenance"),
    task(42, "PICC line maintenance", 20, Qualification::NurseOnly, "PICC dressing change and flushing"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_sorted_and_unique() {
        let catalog = TaskCatalog::standard();
        let ids: Vec<TaskId> = catalog.iter().map(|task| task.id).collect();
        assert_eq!(ids.len(), 42);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ids.first(), Some(&1));
    }

    #[test]
    fn lookup_misses_return_none() {
        let catalog = TaskCatalog::standard();
        assert!(catalog.lookup(0).is_none());
        assert!(catalog.lookup(43).is_none());
        assert!(catalog.lookup(99).is_none());
    }

    #[test]
    fn nurse_only_tier_is_flagged() {
        let catalog = TaskCatalog::standard();
        let catheterization = catalog.lookup(35).expect("task 35 present");
        assert_eq!(catheterization.name, "One-time catheterization");
        assert_eq!(catheterization.qualification, Qualification::NurseOnly);
        assert_eq!(
            catalog.lookup(21).map(|task| task.qualification),
            Some(Qualification::Any)
        );
        assert_eq!(catalog.nurse_only_ids().count(), 14);
    }
}
