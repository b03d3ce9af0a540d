pub(super) const BUILTIN_RECIPES: [(&str, &str); 20] = [
    (
        "pizza",
        "🍕 Pizza Recipe:\n- Dough\n- Tomato Sauce\n- Cheese\n- Toppings (Pepperoni, Vegetables)\n- Bake at 220°C for 15-20 minutes.",
    ),
    (
        "hotdog",
        "🌭 Hotdog Recipe:\n- Hotdog Bun\n- Sausage\n- Mustard/Ketchup\n- Onions, Pickles (optional).",
    ),
    (
        "ice cream",
        "🍨 Ice Cream Recipe:\n- Milk\n- Sugar\n- Cream\n- Vanilla Extract\n- Freeze and churn until smooth.",
    ),
    (
        "spaghetti",
        "🍝 Spaghetti Recipe:\n- Spaghetti Pasta\n- Tomato Sauce\n- Garlic\n- Olive Oil\n- Parmesan Cheese.",
    ),
    (
        "salad",
        "🥗 Salad Recipe:\n- Lettuce\n- Tomato\n- Cucumber\n- Olive Oil\n- Lemon Juice.",
    ),
    (
        "burger",
        "🍔 Burger Recipe:\n- Bun\n- Patty (Beef/Veggie)\n- Cheese\n- Lettuce, Tomato\n- Condiments (Ketchup, Mustard).",
    ),
    (
        "sushi",
        "🍣 Sushi Recipe:\n- Sushi Rice\n- Nori Sheets\n- Fish (Salmon, Tuna) or Veggies\n- Soy Sauce, Wasabi.",
    ),
    (
        "pancake",
        "🥞 Pancake Recipe:\n- Flour\n- Milk\n- Eggs\n- Sugar\n- Maple Syrup for topping.",
    ),
    (
        "sandwich",
        "🥪 Sandwich Recipe:\n- Bread\n- Cheese, Lettuce, Tomato\n- Meat (Ham/Turkey) or Veggies\n- Condiments.",
    ),
    (
        "omelette",
        "🍳 Omelette Recipe:\n- Eggs\n- Salt, Pepper\n- Cheese, Vegetables (optional)\n- Cook on medium heat.",
    ),
    (
        "fries",
        "🍟 Fries Recipe:\n- Potatoes\n- Salt\n- Oil (for frying)\n- Ketchup for dipping.",
    ),
    (
        "tacos",
        "🌮 Tacos Recipe:\n- Tortillas\n- Meat (Chicken/Beef) or Veggies\n- Cheese, Salsa\n- Lettuce, Sour Cream.",
    ),
    (
        "noodles",
        "🍜 Noodles Recipe:\n- Noodles\n- Soy Sauce\n- Vegetables\n- Chicken or Tofu (optional).",
    ),
    (
        "dumplings",
        "🥟 Dumplings Recipe:\n- Dough Wrappers\n- Filling (Meat/Veggie)\n- Soy Sauce, Vinegar for dipping.",
    ),
    (
        "steak",
        "🥩 Steak Recipe:\n- Beef Steak\n- Salt, Pepper\n- Butter, Garlic for basting\n- Cook to desired doneness.",
    ),
    (
        "cake",
        "🍰 Cake Recipe:\n- Flour\n- Sugar\n- Eggs\n- Butter\n- Frosting of choice.",
    ),
    (
        "curry",
        "🍛 Curry Recipe:\n- Chicken or Veggies\n- Curry Powder\n- Coconut Milk\n- Rice on the side.",
    ),
    (
        "soup",
        "🥣 Soup Recipe:\n- Vegetables or Chicken\n- Broth\n- Salt, Pepper\n- Herbs for garnish.",
    ),
    (
        "popcorn",
        "🍿 Popcorn Recipe:\n- Corn Kernels\n- Oil\n- Salt or Flavoring of choice.",
    ),
    (
        "coffee",
        "☕ Coffee Recipe:\n- Coffee Powder\n- Hot Water\n- Milk/Sugar (optional).",
    ),
];
