use crate::core::models::{ActivityTemplate, Category, Reminder};
use crate::core::types::Rgb;
use crate::errors::{Error, Result};

// ============
// CategoryBook
// ============

/// Ordered name → color table. Entries may point at names that are not here.
#[derive(Debug, Default, Clone)]
pub struct CategoryBook {
    categories: Vec<Category>,
}

impl CategoryBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Display color for `name`, or [`Rgb::FALLBACK`] for dangling references.
    pub fn color_for(&self, name: &str) -> Rgb {
        self.get(name).map(|c| c.color).unwrap_or(Rgb::FALLBACK)
    }

    pub fn add(&mut self, name: impl Into<String>, color: Rgb) -> Result<()> {
        let name = Self::clean_name(name.into())?;
        if self.contains(&name) {
            return Err(Error::duplicate("Category", name));
        }
        self.categories.push(Category::new(name, color));
        Ok(())
    }

    /// Adds `name` with the fallback color when it is unknown. Returns whether it was created.
    pub fn ensure(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if self.contains(name) {
            return Ok(false);
        }
        self.add(name, Rgb::FALLBACK)?;
        Ok(true)
    }

    /// Renames in place. Entries that used `old` are left untouched.
    pub fn rename(&mut self, old: &str, new: impl Into<String>) -> Result<()> {
        let new = Self::clean_name(new.into())?;
        let idx = self
            .position(old)
            .ok_or_else(|| Error::not_found("Category", old))?;
        if new != old && self.contains(&new) {
            return Err(Error::duplicate("Category", new));
        }
        self.categories[idx].name = new;
        Ok(())
    }

    pub fn recolor(&mut self, name: &str, color: Rgb) -> Result<()> {
        let idx = self
            .position(name)
            .ok_or_else(|| Error::not_found("Category", name))?;
        self.categories[idx].color = color;
        Ok(())
    }

    /// Removes the category only; scheduled entries keep their label.
    pub fn remove(&mut self, name: &str) -> Result<Category> {
        let idx = self
            .position(name)
            .ok_or_else(|| Error::not_found("Category", name))?;
        Ok(self.categories.remove(idx))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    fn clean_name(name: String) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::Parse("Category name cannot be empty.".into()));
        }
        Ok(trimmed.to_string())
    }
}

// ============
// ActivityBook
// ============

#[derive(Debug, Default, Clone)]
pub struct ActivityBook {
    templates: Vec<ActivityTemplate>,
}

impl ActivityBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityTemplate> {
        self.templates.iter()
    }

    pub fn get(&self, name: &str) -> Result<&ActivityTemplate> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| Error::not_found("Activity", name))
    }

    pub fn add(&mut self, template: ActivityTemplate) -> Result<()> {
        template.validate()?;
        if self.templates.iter().any(|t| t.name == template.name) {
            return Err(Error::duplicate("Activity", template.name));
        }
        self.templates.push(template);
        Ok(())
    }

    /// Replaces `old_name`; a rename keeps the template's place in the list.
    pub fn edit(&mut self, old_name: &str, template: ActivityTemplate) -> Result<()> {
        template.validate()?;
        let idx = self
            .templates
            .iter()
            .position(|t| t.name == old_name)
            .ok_or_else(|| Error::not_found("Activity", old_name))?;
        let clash = self
            .templates
            .iter()
            .enumerate()
            .any(|(i, t)| i != idx && t.name == template.name);
        if clash {
            return Err(Error::duplicate("Activity", template.name));
        }
        self.templates[idx] = template;
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<ActivityTemplate> {
        let idx = self
            .templates
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| Error::not_found("Activity", name))?;
        Ok(self.templates.remove(idx))
    }
}

// ============
// ReminderList
// ============

#[derive(Debug, Default, Clone)]
pub struct ReminderList {
    items: Vec<Reminder>,
}

impl ReminderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reminder> {
        self.items.iter()
    }

    pub fn add(&mut self, text: impl Into<String>) -> Result<&Reminder> {
        self.items.push(Reminder::new(text)?);
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn edit(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let reminder = Reminder::new(text)?;
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| Error::not_found("Reminder", format!("#{index}")))?;
        *slot = reminder;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Reminder> {
        if index >= self.items.len() {
            return Err(Error::not_found("Reminder", format!("#{index}")));
        }
        Ok(self.items.remove(index))
    }
}
