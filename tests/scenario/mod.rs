mod career_progression;
mod pirep_review;
