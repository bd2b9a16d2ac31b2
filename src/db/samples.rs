use crate::db::models::NewRecipe;

/// Recipes inserted when the table is empty at startup.
pub fn sample_recipes() -> Vec<NewRecipe> {
    vec![
        NewRecipe {
            name: "Vanilla Bean".to_string(),
            ingredients: "2 cups heavy cream\n1 cup milk\n3/4 cup sugar\n1 vanilla bean\n6 egg yolks"
                .to_string(),
            instructions: "Heat cream and milk\nWhisk egg yolks with sugar\nTemper eggs with hot cream\nCook until thick\nStrain and chill\nChurn in ice cream maker"
                .to_string(),
            prep_time: 45,
        },
        NewRecipe {
            name: "Chocolate Fudge".to_string(),
            ingredients: "2 cups heavy cream\n1 cup milk\n3/4 cup sugar\n1/2 cup cocoa powder\n6 egg yolks\n1/2 cup fudge sauce"
                .to_string(),
            instructions: "Whisk cocoa with sugar\nHeat cream and milk\nWhisk egg yolks\nTemper eggs with hot cream mixture\nCook until thick\nAdd fudge swirls\nChurn in ice cream maker"
                .to_string(),
            prep_time: 50,
        },
    ]
}
