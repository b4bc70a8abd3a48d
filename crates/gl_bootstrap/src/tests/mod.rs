//! Whole-sequence tests against the scripted window system
