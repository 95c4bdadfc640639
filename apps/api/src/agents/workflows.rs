//! Static workflow compositions.
//!
//! A workflow is an ordered list of stages; a stage is a single agent or a
//! group of agents run concurrently. Groups execute strictly in order. A
//! later stage may read any `output_key` produced before it; concurrent
//! siblings may not read each other's output, so every sibling must write a
//! distinct key.

use super::{
    AgentSpec, DAILY_PLANNER_AGENT, INTERVIEW_PLANNER_AGENT, INTERVIEW_PROCESSOR_AGENT,
    INTERVIEW_SEARCH_AGENT, JOB_ADVISOR_AGENT, JOB_COORDINATOR_AGENT, JOB_WEB_SEARCH_AGENT,
    QUALITY_JUDGE_AGENT, QUIZ_AGENT, RESUME_ATS_AGENT, STUDY_PLANNER_AGENT, STUDY_RESEARCH_AGENT,
    WELLNESS_AGENT,
};

/// One stage: a single step or a set of steps run concurrently.
#[derive(Debug, Clone)]
pub enum Stage {
    Single(AgentSpec),
    Parallel(Vec<AgentSpec>),
}

/// A named, static composition of agent steps.
#[derive(Debug, Clone)]
pub struct Workflow {
    pub name: &'static str,
    pub stages: Vec<Stage>,
}

/// Daily planning: specialists fan out, the study planner refines the
/// research, the final planner merges everything.
pub fn daily_workflow() -> Workflow {
    Workflow {
        name: "DailyPlannerWorkflow",
        stages: vec![
            Stage::Parallel(vec![
                STUDY_RESEARCH_AGENT,
                JOB_ADVISOR_AGENT,
                WELLNESS_AGENT,
            ]),
            Stage::Single(STUDY_PLANNER_AGENT),
            Stage::Single(DAILY_PLANNER_AGENT),
        ],
    }
}

/// Interview preparation: research, then structure, then format.
pub fn interview_workflow() -> Workflow {
    Workflow {
        name: "InterviewWorkflow",
        stages: vec![
            Stage::Single(INTERVIEW_SEARCH_AGENT),
            Stage::Single(INTERVIEW_PROCESSOR_AGENT),
            Stage::Single(INTERVIEW_PLANNER_AGENT),
        ],
    }
}

pub fn quiz_workflow() -> Workflow {
    Workflow {
        name: "QuizWorkflow",
        stages: vec![Stage::Single(QUIZ_AGENT)],
    }
}

/// Job search: raw listings first, then a formatted report.
pub fn job_search_workflow() -> Workflow {
    Workflow {
        name: "SimpleJobSearch",
        stages: vec![
            Stage::Single(JOB_WEB_SEARCH_AGENT),
            Stage::Single(JOB_COORDINATOR_AGENT),
        ],
    }
}

pub fn resume_analysis_workflow() -> Workflow {
    Workflow {
        name: "ResumeAnalysis",
        stages: vec![Stage::Single(RESUME_ATS_AGENT)],
    }
}

pub fn quality_judge_workflow() -> Workflow {
    Workflow {
        name: "QualityJudge",
        stages: vec![Stage::Single(QUALITY_JUDGE_AGENT)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_workflows() -> Vec<Workflow> {
        vec![
            daily_workflow(),
            interview_workflow(),
            quiz_workflow(),
            job_search_workflow(),
            resume_analysis_workflow(),
            quality_judge_workflow(),
        ]
    }

    fn stage_agents(stage: &Stage) -> Vec<&AgentSpec> {
        match stage {
            Stage::Single(agent) => vec![agent],
            Stage::Parallel(agents) => agents.iter().collect(),
        }
    }

    #[test]
    fn test_workflow_names_are_unique() {
        let names: HashSet<_> = all_workflows().iter().map(|w| w.name).collect();
        assert_eq!(names.len(), all_workflows().len());
    }

    #[test]
    fn test_no_workflow_is_empty() {
        for workflow in all_workflows() {
            assert!(!workflow.stages.is_empty(), "{} is empty", workflow.name);
        }
    }

    #[test]
    fn test_output_keys_distinct_within_each_workflow() {
        for workflow in all_workflows() {
            let keys: Vec<_> = workflow
                .stages
                .iter()
                .flat_map(stage_agents)
                .map(|a| a.output_key)
                .collect();
            let unique: HashSet<_> = keys.iter().collect();
            assert_eq!(unique.len(), keys.len(), "{} reuses a key", workflow.name);
        }
    }

    #[test]
    fn test_parallel_siblings_write_distinct_keys() {
        for workflow in all_workflows() {
            for stage in &workflow.stages {
                if let Stage::Parallel(agents) = stage {
                    let keys: HashSet<_> = agents.iter().map(|a| a.output_key).collect();
                    assert_eq!(keys.len(), agents.len(), "{}", workflow.name);
                }
            }
        }
    }

    #[test]
    fn test_daily_workflow_ends_with_final_planner() {
        let workflow = daily_workflow();
        let last = workflow.stages.last().unwrap();
        match last {
            Stage::Single(agent) => assert_eq!(agent.output_key, "daily_plan"),
            Stage::Parallel(_) => panic!("final stage must be a single step"),
        }
    }
}
