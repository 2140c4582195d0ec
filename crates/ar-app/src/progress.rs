use ar_sim::SimProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    CheckingCache,
    LoadingCachedResult,
    Simulating,
    SavingResults,
    Completed,
}

impl RunStage {
    pub fn label(self) -> &'static str {
        match self {
            RunStage::CheckingCache => "checking cache",
            RunStage::LoadingCachedResult => "loading cached result",
            RunStage::Simulating => "simulating",
            RunStage::SavingResults => "saving results",
            RunStage::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunProgressEvent {
    pub stage: RunStage,
    pub elapsed_wall_s: f64,
    pub message: Option<String>,
    /// Present while simulating
    pub sim: Option<SimProgress>,
}

impl RunProgressEvent {
    /// Overall completion: simulation fraction while running, 1 once done.
    pub fn fraction_complete(&self) -> f64 {
        match self.stage {
            RunStage::Completed => 1.0,
            _ => self.sim.map(|p| p.fraction_complete).unwrap_or(0.0),
        }
    }
}
