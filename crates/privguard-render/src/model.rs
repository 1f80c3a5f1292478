#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableObservation {
    pub identity: String,
    pub value: String,
    pub defaulted: bool,
    pub description: String,
    pub compliant: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub check_id: String,
    pub vulnerable: bool,
    pub severity: RenderableSeverity,
    pub observations: Vec<RenderableObservation>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub checks_run: u32,
    pub checks_vulnerable: u32,
    pub observations_total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}
