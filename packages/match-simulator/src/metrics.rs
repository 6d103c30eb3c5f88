//! Aggregate statistics over simulated matches.

use serde::Serialize;

use crate::simulator::MatchResult;
use bringten_backend::TeamId;

#[derive(Debug, Default, Clone, Serialize)]
pub struct TeamStats {
    pub wins: u32,
    pub total_score: u64,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct Summary {
    pub matches: u32,
    pub errors: u32,
    pub teams: [TeamStats; 2],
    pub total_deals: u64,
    pub total_actions: u64,
    pub total_begs: u64,
    pub total_go_agains: u64,
    pub elapsed_ms: f64,
}

impl Summary {
    pub fn record(&mut self, result: &MatchResult) {
        self.matches += 1;
        self.teams[result.winner.index()].wins += 1;
        self.teams[TeamId::One.index()].total_score += u64::from(result.team_1_score);
        self.teams[TeamId::Two.index()].total_score += u64::from(result.team_2_score);
        self.total_deals += u64::from(result.deals);
        self.total_actions += u64::from(result.actions);
        self.total_begs += u64::from(result.begs);
        self.total_go_agains += u64::from(result.go_agains);
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    pub fn win_rate(&self, team: TeamId) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        f64::from(self.teams[team.index()].wins) / f64::from(self.matches) * 100.0
    }

    fn per_match(&self, total: u64) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        total as f64 / f64::from(self.matches)
    }

    pub fn print(&self, requested: u32) {
        println!("\n=== Simulation Summary ===");
        println!("Matches completed: {}/{}", self.matches, requested);
        if self.errors > 0 {
            println!("Errors: {}", self.errors);
        }
        println!("Total time: {:.1} ms", self.elapsed_ms);
        if self.matches == 0 {
            return;
        }
        println!("Deals per match: {:.1}", self.per_match(self.total_deals));
        println!("Actions per match: {:.1}", self.per_match(self.total_actions));
        println!("Begs per match: {:.1}", self.per_match(self.total_begs));
        println!(
            "Go-agains per match: {:.1}",
            self.per_match(self.total_go_agains)
        );

        println!("\n=== Results by Team ===");
        for team in TeamId::BOTH {
            let stats = &self.teams[team.index()];
            println!(
                "{}: wins={} ({:.1}%), avg final score={:.2}",
                team,
                stats.wins,
                self.win_rate(team),
                self.per_match(stats.total_score)
            );
        }
    }
}
